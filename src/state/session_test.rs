use super::*;

fn admin_json() -> &'static str {
    r#"{"id":"u1","name":"Dana","email":"dana@example.com","role":"admin"}"#
}

#[test]
fn from_stored_parses_token_and_profile() {
    let session = Session::from_stored(Some("tok-123".to_owned()), Some(admin_json()));
    assert!(session.is_authenticated());
    assert!(session.is_admin());
    assert_eq!(session.user.unwrap().name, "Dana");
}

#[test]
fn blank_token_means_signed_out() {
    let session = Session::from_stored(Some("   ".to_owned()), None);
    assert!(!session.is_authenticated());
}

#[test]
fn corrupt_profile_json_is_dropped_without_losing_the_token() {
    let session = Session::from_stored(Some("tok".to_owned()), Some("{not json"));
    assert!(session.is_authenticated());
    assert!(session.user.is_none());
    assert!(!session.is_admin());
}

#[test]
fn invalidate_clears_both_fields() {
    let mut session = Session::from_stored(Some("tok".to_owned()), Some(admin_json()));
    session.invalidate();
    assert_eq!(session, Session::default());
}

#[test]
fn sign_in_replaces_any_prior_session() {
    let mut session = Session::default();
    session.sign_in(
        "tok".to_owned(),
        UserProfile {
            id: "u2".to_owned(),
            name: "Lee".to_owned(),
            email: "lee@example.com".to_owned(),
            role: None,
        },
    );
    assert!(session.is_authenticated());
    assert!(!session.is_admin());
}
