//! Geometry helpers for the SVG pie, bar, and heatmap renderings.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use std::f64::consts::PI;

/// One pie slice ready to render: label, color, and an SVG path.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub color: String,
    pub value: u32,
    pub path: String,
}

/// Compute pie slices for `(label, value, color)` entries around a circle of
/// the given radius centered at `(cx, cy)`. Zero-value entries are skipped.
pub fn pie_slices(entries: &[(String, u32, String)], cx: f64, cy: f64, radius: f64) -> Vec<PieSlice> {
    let total: u32 = entries.iter().map(|(_, value, _)| value).sum();
    if total == 0 {
        return Vec::new();
    }
    let mut slices = Vec::new();
    let mut angle = -PI / 2.0;
    for (label, value, color) in entries {
        if *value == 0 {
            continue;
        }
        let sweep = f64::from(*value) / f64::from(total) * 2.0 * PI;
        let end = angle + sweep;
        slices.push(PieSlice {
            label: label.clone(),
            color: color.clone(),
            value: *value,
            path: arc_path(cx, cy, radius, angle, end),
        });
        angle = end;
    }
    slices
}

/// SVG path for a filled arc from `start` to `end` radians.
fn arc_path(cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> String {
    // A full circle has coincident endpoints, which SVG arcs cannot express;
    // nudge the end back by a hair.
    let end = if (end - start) >= 2.0 * PI { end - 1e-4 } else { end };
    let (x1, y1) = (cx + radius * start.cos(), cy + radius * start.sin());
    let (x2, y2) = (cx + radius * end.cos(), cy + radius * end.sin());
    let large = u8::from(end - start > PI);
    format!("M{cx:.2},{cy:.2} L{x1:.2},{y1:.2} A{radius:.2},{radius:.2} 0 {large} 1 {x2:.2},{y2:.2} Z")
}

/// Bar height in pixels scaled against the maximum value in the series.
pub fn bar_height(value: f64, max_value: f64, plot_height: f64) -> f64 {
    if max_value <= 0.0 || value <= 0.0 {
        return 0.0;
    }
    (value / max_value) * plot_height
}

/// Background opacity for a heatmap cell given its normalized intensity.
pub fn heatmap_opacity(intensity: f64) -> f64 {
    intensity.clamp(0.0, 1.0).mul_add(0.85, 0.15)
}
