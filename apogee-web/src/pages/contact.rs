use yew::prelude::*;

#[derive(Clone, PartialEq, Eq)]
enum FormStatus {
    Idle,
    MissingFields,
    Sending,
    Sent(String),
}

/// Contact form with a simulated submission: there is no backend, so a short
/// timer stands in for the round trip before the confirmation appears.
#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let status = use_state(|| FormStatus::Idle);
    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let message_ref = use_node_ref();

    let on_submit = {
        let status = status.clone();
        let form_ref = form_ref.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let message_ref = message_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let field = |node: &NodeRef| {
                node.cast::<web_sys::HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            let name = field(&name_ref);
            let email = field(&email_ref);
            let message = message_ref
                .cast::<web_sys::HtmlTextAreaElement>()
                .map(|area| area.value())
                .unwrap_or_default();

            if name.trim().is_empty() || email.trim().is_empty() || message.trim().is_empty() {
                status.set(FormStatus::MissingFields);
                return;
            }
            status.set(FormStatus::Sending);

            #[cfg(target_arch = "wasm32")]
            {
                let status = status.clone();
                let form_ref = form_ref.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let _ = crate::dom::sleep_ms(1500).await;
                    if let Some(form) = form_ref.cast::<web_sys::HtmlFormElement>() {
                        form.reset();
                    }
                    status.set(FormStatus::Sent(name));
                });
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = &form_ref;
                status.set(FormStatus::Sent(name));
            }
        })
    };

    let sending = *status == FormStatus::Sending;
    let notice = match &*status {
        FormStatus::Idle => Html::default(),
        FormStatus::MissingFields => html! {
            <p class="form-status form-error" role="alert">{ "Please fill in all required fields." }</p>
        },
        FormStatus::Sending => html! {
            <p class="form-status" aria-live="polite">{ "Sending..." }</p>
        },
        FormStatus::Sent(name) => html! {
            <p class="form-status form-success" aria-live="polite">
                { format!("Thank you, {name}! Your message has been sent. We'll get back to you soon!") }
            </p>
        },
    };

    html! {
        <div class="page contact-page">
            <div class="container">
                <h1 class="page-title">{ "Contact Us" }</h1>
                <form class="contact-form" ref={form_ref} onsubmit={on_submit}>
                    <label for="contact-name">{ "Name *" }</label>
                    <input id="contact-name" name="name" type="text" ref={name_ref} />
                    <label for="contact-email">{ "Email *" }</label>
                    <input id="contact-email" name="email" type="email" ref={email_ref} />
                    <label for="contact-subject">{ "Subject" }</label>
                    <input id="contact-subject" name="subject" type="text" />
                    <label for="contact-message">{ "Message *" }</label>
                    <textarea id="contact-message" name="message" rows="6" ref={message_ref} />
                    <button type="submit" class="submit-btn" disabled={sending}>
                        { if sending { "Sending..." } else { "Send Message" } }
                    </button>
                </form>
                { notice }
            </div>
        </div>
    }
}
