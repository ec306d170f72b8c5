use super::*;

#[test]
fn unauthorized_is_destructive() {
    assert_eq!(classify_error(&ApiError::Unauthorized), ErrorRoute::InvalidateSession);
}

#[test]
fn rate_limits_go_to_the_snackbar_with_their_notice() {
    let error = ApiError::RateLimited(RateLimitNotice {
        reset_time_seconds: 30,
        message: "slow down".to_owned(),
    });
    match classify_error(&error) {
        ErrorRoute::RateLimit(notice) => assert_eq!(notice.reset_time_seconds, 30),
        other => panic!("unexpected route: {other:?}"),
    }
}

#[test]
fn http_and_validation_errors_become_banners() {
    let http = ApiError::Http { status: 500, message: "server exploded".to_owned() };
    assert_eq!(classify_error(&http), ErrorRoute::Banner("server exploded".to_owned()));

    let validation = ApiError::Validation("missing project".to_owned());
    assert_eq!(classify_error(&validation), ErrorRoute::Banner("missing project".to_owned()));
}
