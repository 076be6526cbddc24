use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    /// The previous submission was rejected; show the failure notice.
    pub failed: bool,
    pub on_submit: Callback<String>,
    pub on_close: Callback<()>,
}

/// Master-code challenge for entering private mode. A wrong code keeps the
/// dialog open with a visible failure message and changes nothing else.
#[function_component(UnlockDialog)]
pub fn unlock_dialog(p: &Props) -> Html {
    let input_ref = use_node_ref();
    if !p.open {
        return Html::default();
    }

    let on_submit = {
        let cb = p.on_submit.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(input) = input_ref.cast::<web_sys::HtmlInputElement>() {
                cb.emit(input.value().trim().to_string());
            }
        })
    };
    let on_close = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_keydown = {
        let cb = p.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };
    let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" role="presentation" onclick={on_close.clone()}>
            <div
                class="modal unlock-dialog"
                role="dialog"
                aria-modal="true"
                aria-labelledby="unlock-title"
                onclick={swallow_click}
                onkeydown={on_keydown}
            >
                <div class="modal__header">
                    <h2 id="unlock-title">{ "Private Mode" }</h2>
                    <button type="button" class="modal__close" aria-label="Close dialog" onclick={on_close.clone()}>
                        { "X" }
                    </button>
                </div>
                <form class="modal__body" onsubmit={on_submit}>
                    <label for="master-code">{ "Enter master code:" }</label>
                    <input
                        id="master-code"
                        type="password"
                        autocomplete="off"
                        ref={input_ref}
                    />
                    { p.failed.then(|| html! {
                        <p class="unlock-error" role="alert">{ "Incorrect code" }</p>
                    }).unwrap_or_default() }
                    <div class="controls">
                        <button type="submit">{ "Unlock" }</button>
                        <button type="button" onclick={on_close}>{ "Cancel" }</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
