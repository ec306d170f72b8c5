//! SVG pie chart with a legend.

use leptos::prelude::*;

use crate::util::chart::pie_slices;

/// Pie chart over `(label, value, color)` entries. Empty entries collapse
/// to a placeholder message.
#[component]
pub fn PieChart(entries: Signal<Vec<(String, u32, String)>>, title: &'static str) -> impl IntoView {
    let slices = move || pie_slices(&entries.get(), 60.0, 60.0, 55.0);

    view! {
        <div class="chart chart--pie">
            <h3 class="chart__title">{title}</h3>
            <Show
                when=move || !slices().is_empty()
                fallback=|| view! { <p class="chart__empty">"No data to display."</p> }
            >
                <svg viewBox="0 0 120 120" class="chart__svg">
                    {move || {
                        slices()
                            .into_iter()
                            .map(|slice| {
                                view! { <path d=slice.path fill=slice.color></path> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </svg>
                <ul class="chart__legend">
                    {move || {
                        slices()
                            .into_iter()
                            .map(|slice| {
                                view! {
                                    <li class="chart__legend-item">
                                        <span
                                            class="chart__swatch"
                                            style=format!("background-color:{}", slice.color)
                                        ></span>
                                        {format!("{} ({})", slice.label, slice.value)}
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </div>
    }
}
