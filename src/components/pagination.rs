//! Previous/next pagination controls shared by the data tables.

use leptos::prelude::*;

/// Pager bar. `page` and `pages` are read reactively; `on_page` receives
/// the requested 1-based page.
#[component]
pub fn Pager(
    page: Signal<u32>,
    pages: Signal<u32>,
    on_page: Callback<u32>,
) -> impl IntoView {
    let at_start = move || page.get() <= 1;
    let at_end = move || page.get() >= pages.get().max(1);

    view! {
        <div class="pager">
            <button
                class="pager__button"
                disabled=at_start
                on:click=move |_| on_page.run(page.get().saturating_sub(1).max(1))
            >
                "Previous"
            </button>
            <span class="pager__status">
                {move || format!("Page {} of {}", page.get(), pages.get().max(1))}
            </span>
            <button
                class="pager__button"
                disabled=at_end
                on:click=move |_| on_page.run(page.get() + 1)
            >
                "Next"
            </button>
        </div>
    }
}
