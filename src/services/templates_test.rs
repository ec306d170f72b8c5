use super::*;

#[test]
fn template_endpoints_address_one_template_by_id() {
    assert_eq!(template_endpoint("t-1"), "/templates/t-1");
}

#[test]
fn response_endpoints_distinguish_item_listing_and_status() {
    assert_eq!(
        responses_for_template_endpoint("t-1"),
        "/template-responses/template/t-1"
    );
    assert_eq!(response_endpoint("r-9"), "/template-responses/r-9");
    assert_eq!(response_status_endpoint("r-9"), "/template-responses/r-9/status");
}

#[test]
fn status_update_body_carries_a_bare_status_field() {
    let body = ResponseStatusUpdate { status: "approved".to_owned() };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "status": "approved" })
    );
}
