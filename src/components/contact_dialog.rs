//! Contact-support dialog posting to the backend contact endpoint.

use leptos::prelude::*;

use crate::services::contact::SupportRequest;

#[component]
pub fn ContactDialog(on_close: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let sent = RwSignal::new(false);
    let sending = RwSignal::new(false);

    let request = move || SupportRequest {
        name: name.get(),
        email: email.get(),
        subject: subject.get(),
        message: message.get(),
    };

    let submit = Callback::new(move |()| {
        let payload = request();
        if !payload.is_complete() {
            error.set(Some("Please fill in every field.".to_owned()));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            sending.set(true);
            leptos::task::spawn_local(async move {
                match crate::services::contact::send(&payload).await {
                    Ok(_) => {
                        sent.set(true);
                        error.set(None);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                sending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--contact" on:click=move |ev| ev.stop_propagation()>
                <h2 class="dialog__title">"Contact Support"</h2>
                <Show
                    when=move || !sent.get()
                    fallback=move || {
                        view! {
                            <p class="dialog__message">"Message sent. We will get back to you soon."</p>
                            <div class="dialog__actions">
                                <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                                    "Close"
                                </button>
                            </div>
                        }
                    }
                >
                    {move || {
                        error.get().map(|e| view! { <p class="dialog__error">{e}</p> })
                    }}
                    <label class="dialog__label">
                        "Name"
                        <input
                            class="dialog__input"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Email"
                        <input
                            class="dialog__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Subject"
                        <input
                            class="dialog__input"
                            prop:value=move || subject.get()
                            on:input=move |ev| subject.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Message"
                        <textarea
                            class="dialog__input dialog__input--area"
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button
                            class="btn btn--primary"
                            disabled=move || sending.get()
                            on:click=move |_| submit.run(())
                        >
                            {move || if sending.get() { "Sending..." } else { "Send" }}
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
