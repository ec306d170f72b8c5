//! 5x5 impact/probability heatmap.
//!
//! Both axes derive from the single severity rating, so populated cells sit
//! on the diagonal; the full grid is still drawn so the chart reads as a
//! standard risk matrix.

use leptos::prelude::*;

use crate::util::chart::heatmap_opacity;

const CELL: f64 = 36.0;

#[component]
pub fn Heatmap(cells: Signal<[[u32; 5]; 5]>, title: &'static str) -> impl IntoView {
    let max = move || {
        cells
            .get()
            .iter()
            .flatten()
            .copied()
            .max()
            .unwrap_or(0)
            .max(1)
    };

    view! {
        <div class="chart chart--heatmap">
            <h3 class="chart__title">{title}</h3>
            <svg viewBox="0 0 200 200" class="chart__svg">
                {move || {
                    let grid = cells.get();
                    let peak = f64::from(max());
                    let mut rects = Vec::with_capacity(25);
                    for (impact, row) in grid.iter().enumerate() {
                        for (probability, count) in row.iter().enumerate() {
                            // Impact grows upward, probability rightward.
                            let x = probability as f64 * CELL + 10.0;
                            let y = (4 - impact) as f64 * CELL + 10.0;
                            let opacity = if *count == 0 {
                                0.08
                            } else {
                                heatmap_opacity(f64::from(*count) / peak)
                            };
                            rects.push(view! {
                                <g>
                                    <rect
                                        x=x
                                        y=y
                                        width=CELL - 2.0
                                        height=CELL - 2.0
                                        fill="#dc2626"
                                        fill-opacity=opacity
                                    ></rect>
                                    <text
                                        x=x + CELL / 2.0 - 1.0
                                        y=y + CELL / 2.0 + 3.0
                                        text-anchor="middle"
                                        class="chart__cell-count"
                                    >
                                        {if *count > 0 { count.to_string() } else { String::new() }}
                                    </text>
                                </g>
                            });
                        }
                    }
                    rects
                }}
            </svg>
            <div class="chart__axes">
                <span class="chart__axis-y">"Impact"</span>
                <span class="chart__axis-x">"Probability"</span>
            </div>
        </div>
    }
}
