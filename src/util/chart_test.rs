use super::*;

fn entries(values: &[(&str, u32)]) -> Vec<(String, u32, String)> {
    values
        .iter()
        .map(|(label, value)| ((*label).to_owned(), *value, "#000".to_owned()))
        .collect()
}

#[test]
fn pie_slices_skip_zero_entries() {
    let slices = pie_slices(&entries(&[("Critical", 2), ("High", 0), ("Low", 2)]), 50.0, 50.0, 40.0);
    let labels: Vec<&str> = slices.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["Critical", "Low"]);
}

#[test]
fn pie_slices_empty_when_total_is_zero() {
    assert!(pie_slices(&entries(&[("Critical", 0)]), 50.0, 50.0, 40.0).is_empty());
}

#[test]
fn single_entry_produces_a_near_full_circle_path() {
    let slices = pie_slices(&entries(&[("Medium", 7)]), 50.0, 50.0, 40.0);
    assert_eq!(slices.len(), 1);
    // Sweep > PI must set the large-arc flag.
    assert!(slices[0].path.contains(" 1 1 "), "{}", slices[0].path);
}

#[test]
fn bar_height_scales_linearly_and_clamps_degenerate_inputs() {
    assert!((bar_height(2.5, 5.0, 100.0) - 50.0).abs() < 1e-9);
    assert_eq!(bar_height(1.0, 0.0, 100.0), 0.0);
    assert_eq!(bar_height(-1.0, 5.0, 100.0), 0.0);
}

#[test]
fn heatmap_opacity_keeps_a_visible_floor() {
    assert!((heatmap_opacity(0.0) - 0.15).abs() < 1e-9);
    assert!((heatmap_opacity(1.0) - 1.0).abs() < 1e-9);
    assert!((heatmap_opacity(2.0) - 1.0).abs() < 1e-9);
}
