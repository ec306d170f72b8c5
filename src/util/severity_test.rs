use super::*;

#[test]
fn severity_text_maps_each_rating() {
    assert_eq!(severity_text(5), "Critical");
    assert_eq!(severity_text(4), "High");
    assert_eq!(severity_text(3), "Medium");
    assert_eq!(severity_text(2), "Low");
    assert_eq!(severity_text(1), "Very Low");
}

#[test]
fn severity_below_one_is_very_low() {
    assert_eq!(severity_text(0), "Very Low");
    assert_eq!(severity_text(-3), "Very Low");
}

#[test]
fn severity_above_five_stays_critical() {
    assert_eq!(severity_text(7), "Critical");
}

#[test]
fn badge_text_includes_the_raw_value() {
    assert_eq!(severity_badge_text(3), "Medium (3)");
    assert_eq!(severity_badge_text(5), "Critical (5)");
}

#[test]
fn levels_order_from_very_low_to_critical() {
    assert!(SeverityLevel::VeryLow < SeverityLevel::Low);
    assert!(SeverityLevel::High < SeverityLevel::Critical);
}
