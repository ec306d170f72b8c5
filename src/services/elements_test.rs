use super::*;

#[test]
fn new_element_serializes_with_camel_case_keys() {
    let element = NewElement {
        project_id: "p-1".to_owned(),
        category: "PII".to_owned(),
        element_name: "email_address".to_owned(),
    };
    let json = serde_json::to_value(&element).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "projectId": "p-1",
            "category": "PII",
            "elementName": "email_address",
        })
    );
}
