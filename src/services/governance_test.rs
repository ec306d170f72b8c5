use super::*;

#[test]
fn history_endpoint_caps_results_only_when_asked() {
    assert_eq!(history_endpoint("p-1", None), "/governance/p-1/history");
    assert_eq!(history_endpoint("p-1", Some(12)), "/governance/p-1/history?limit=12");
}
