use super::*;

use crate::state::controls::ControlTable;

#[test]
fn list_endpoint_combines_type_and_fetch_window() {
    let url = list_by_type_endpoint(SystemType::Ai, &ControlTable::fetch_query());
    assert_eq!(url, "/controls/type?type=AI&page=1&limit=1000");
}

#[test]
fn list_endpoint_handles_an_empty_filter_query() {
    assert_eq!(
        list_by_type_endpoint(SystemType::Cybersecurity, ""),
        "/controls/type?type=Cybersecurity"
    );
}
