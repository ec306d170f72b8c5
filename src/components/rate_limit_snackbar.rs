//! Global snackbar shown while the backend is rate limiting us.
//!
//! Any page that receives a 429 writes the notice into the shared
//! [`RateLimitState`] context; this component owns the one-second tick.

use leptos::prelude::*;

use crate::state::rate_limit::RateLimitState;

#[component]
pub fn RateLimitSnackbar() -> impl IntoView {
    let state = expect_context::<RwSignal<RateLimitState>>();

    // One interval drives every countdown; it idles cheaply when no notice
    // is showing.
    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Interval;
        let interval = Interval::new(1000, move || {
            if state.get_untracked().is_active() {
                state.update(RateLimitState::tick);
            }
        });
        on_cleanup(move || drop(interval));
    }

    view! {
        <Show when=move || state.get().is_active()>
            <div class="snackbar snackbar--warning" role="status">
                <span class="snackbar__message">
                    {move || state.get().message().unwrap_or_default().to_owned()}
                </span>
                <span class="snackbar__countdown">
                    {move || format!("Retry in {}s", state.get().remaining_seconds())}
                </span>
                <button
                    class="snackbar__dismiss"
                    on:click=move |_| state.update(RateLimitState::dismiss)
                >
                    "\u{d7}"
                </button>
            </div>
        </Show>
    }
}
