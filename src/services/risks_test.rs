use super::*;

use crate::state::risk_dashboard::RiskFilters;

#[test]
fn list_endpoint_places_the_type_before_the_filters() {
    let filters = RiskFilters::default();
    let url = list_by_type_endpoint(SystemType::Ai, &filters.list_query());
    assert_eq!(
        url,
        "/risks/type?type=AI&page=1&limit=10&sortBy=createdAt&sortOrder=desc"
    );
}

#[test]
fn list_endpoint_without_filters_still_carries_the_type() {
    assert_eq!(
        list_by_type_endpoint(SystemType::Cybersecurity, ""),
        "/risks/type?type=Cybersecurity"
    );
}

#[test]
fn project_endpoint_includes_only_supplied_paging() {
    assert_eq!(list_by_project_endpoint("p-1", None, None), "/risks/project/p-1");
    assert_eq!(
        list_by_project_endpoint("p-1", Some(2), Some(50)),
        "/risks/project/p-1?page=2&limit=50"
    );
}

#[test]
fn stats_endpoint_filters_by_project_when_given() {
    assert_eq!(stats_endpoint(None), "/risks/stats/summary");
    assert_eq!(stats_endpoint(Some("")), "/risks/stats/summary");
    assert_eq!(stats_endpoint(Some("p-1")), "/risks/stats/summary?projectId=p-1");
}

#[test]
fn status_update_body_serializes_camel_case() {
    let body = StatusUpdate {
        project_id: "p-1".to_owned(),
        status: RiskStatus::Completed,
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["projectId"], "p-1");
    assert_eq!(json["status"], "Completed");
}
