//! Dismissible error banner for page-level failures.

use leptos::prelude::*;

/// Shows the current error message with a dismiss button. Renders nothing
/// while the signal is `None`.
#[component]
pub fn ErrorBanner(error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-banner" role="alert">
                <span class="error-banner__text">
                    {move || error.get().unwrap_or_default()}
                </span>
                <button class="error-banner__dismiss" on:click=move |_| error.set(None)>
                    "\u{d7}"
                </button>
            </div>
        </Show>
    }
}
