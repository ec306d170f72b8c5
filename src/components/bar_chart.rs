//! Grouped bar chart of per-project risk averages.

use leptos::prelude::*;

use crate::state::risk_dashboard::ProjectBar;
use crate::util::chart::bar_height;

const PLOT_HEIGHT: f64 = 120.0;
const GROUP_WIDTH: f64 = 70.0;
const BAR_WIDTH: f64 = 16.0;

const SERIES: [(&str, &str); 3] = [
    ("Severity", "#dc2626"),
    ("Residual", "#f59e0b"),
    ("Target", "#16a34a"),
];

#[component]
pub fn ProjectBarChart(bars: Signal<Vec<ProjectBar>>, title: &'static str) -> impl IntoView {
    view! {
        <div class="chart chart--bars">
            <h3 class="chart__title">{title}</h3>
            <Show
                when=move || !bars.get().is_empty()
                fallback=|| view! { <p class="chart__empty">"No data to display."</p> }
            >
                <svg
                    class="chart__svg"
                    viewBox=move || {
                        format!("0 0 {} {}", bars.get().len() as f64 * GROUP_WIDTH + 20.0, PLOT_HEIGHT + 40.0)
                    }
                >
                    {move || {
                        let data = bars.get();
                        let max = data
                            .iter()
                            .flat_map(|b| [b.avg_severity, b.avg_residual, b.avg_target])
                            .fold(0.0_f64, f64::max)
                            .max(1.0);
                        data.into_iter()
                            .enumerate()
                            .map(|(index, bar)| {
                                let base_x = index as f64 * GROUP_WIDTH + 10.0;
                                let values = [bar.avg_severity, bar.avg_residual, bar.avg_target];
                                let rects = SERIES
                                    .iter()
                                    .zip(values)
                                    .enumerate()
                                    .map(|(series, ((_, color), value))| {
                                        let height = bar_height(value, max, PLOT_HEIGHT);
                                        view! {
                                            <rect
                                                x=base_x + series as f64 * (BAR_WIDTH + 2.0)
                                                y=PLOT_HEIGHT - height + 10.0
                                                width=BAR_WIDTH
                                                height=height
                                                fill=*color
                                            ></rect>
                                        }
                                    })
                                    .collect::<Vec<_>>();
                                view! {
                                    <g>
                                        {rects}
                                        <text
                                            x=base_x + GROUP_WIDTH / 2.0 - 10.0
                                            y=PLOT_HEIGHT + 26.0
                                            text-anchor="middle"
                                            class="chart__bar-label"
                                        >
                                            {bar.project.clone()}
                                        </text>
                                    </g>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </svg>
                <ul class="chart__legend">
                    {SERIES
                        .iter()
                        .map(|(label, color)| {
                            view! {
                                <li class="chart__legend-item">
                                    <span
                                        class="chart__swatch"
                                        style=format!("background-color:{color}")
                                    ></span>
                                    {*label}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </Show>
        </div>
    }
}
