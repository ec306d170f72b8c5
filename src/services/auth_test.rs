use super::*;

#[test]
fn credentials_need_a_real_email_and_any_password() {
    let mut credentials = Credentials::default();
    assert!(!credentials.is_complete());

    credentials.email = "   ".to_owned();
    credentials.password = "hunter2".to_owned();
    assert!(!credentials.is_complete());

    credentials.email = "rohan@example.com".to_owned();
    assert!(credentials.is_complete());

    // Passwords are taken verbatim; whitespace is not trimmed away.
    credentials.password = " ".to_owned();
    assert!(credentials.is_complete());
}

#[test]
fn credentials_serialize_as_a_flat_login_body() {
    let credentials = Credentials {
        email: "rohan@example.com".to_owned(),
        password: "hunter2".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&credentials).unwrap(),
        serde_json::json!({ "email": "rohan@example.com", "password": "hunter2" })
    );
}
