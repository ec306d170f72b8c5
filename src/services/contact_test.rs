use super::*;

#[test]
fn completeness_requires_every_field_non_blank() {
    let mut request = SupportRequest {
        name: "Dana".to_owned(),
        email: "dana@example.com".to_owned(),
        subject: "Access".to_owned(),
        message: "Please grant access.".to_owned(),
    };
    assert!(request.is_complete());
    request.subject = "   ".to_owned();
    assert!(!request.is_complete());
}
