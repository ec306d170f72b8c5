//! Login page with a credential form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::APP_NAME;
use crate::services::auth::Credentials;
use crate::state::session::Session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    // Already signed in: straight to the dashboard.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if session.get().is_authenticated() {
                navigate("/", NavigateOptions::default());
            }
        });
    }

    let submit = move |_| {
        let credentials = Credentials { email: email.get(), password: password.get() };
        if !credentials.is_complete() {
            error.set(Some("Email and password are required.".to_owned()));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            leptos::task::spawn_local(async move {
                match crate::services::auth::login(&credentials).await {
                    Ok(response) => {
                        session.update(|s| s.sign_in(response.token, response.user));
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
        }
    };

    view! {
        <div class="login-page">
            <h1 class="login-page__title">{APP_NAME}</h1>
            <p class="login-page__subtitle">"Sign in to continue"</p>
            {move || error.get().map(|e| view! { <p class="login-page__error">{e}</p> })}
            <form
                class="login-page__form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit(());
                }
            >
                <label class="login-page__label">
                    "Email"
                    <input
                        class="login-page__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-page__label">
                    "Password"
                    <input
                        class="login-page__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
