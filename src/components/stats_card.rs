//! Simple labeled statistic card for the dashboards.

use leptos::prelude::*;

#[component]
pub fn StatsCard(
    label: &'static str,
    value: Signal<String>,
    #[prop(optional)] hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="stats-card">
            <span class="stats-card__label">{label}</span>
            <span class="stats-card__value">{move || value.get()}</span>
            {hint.map(|h| view! { <span class="stats-card__hint">{h}</span> })}
        </div>
    }
}
