use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// `(src, alt)` of the image to show; `None` keeps the overlay closed.
    pub image: Option<(AttrValue, AttrValue)>,
    pub on_close: Callback<()>,
}

/// Full-screen image overlay for the gallery. Any click or Escape closes it.
#[function_component(Lightbox)]
pub fn lightbox(p: &Props) -> Html {
    let Some((src, alt)) = p.image.clone() else {
        return Html::default();
    };
    let on_click = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_keydown = {
        let cb = p.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                cb.emit(());
            }
        })
    };
    html! {
        <div class="lightbox-backdrop" role="presentation" tabindex="0" onclick={on_click} onkeydown={on_keydown}>
            <img class="lightbox-image" {src} {alt} />
        </div>
    }
}
