use super::*;

#[test]
fn rate_limit_prefers_numeric_body_field() {
    let body = serde_json::json!({ "reset_in_seconds": 30, "message": "slow down" });
    let err = ApiError::rate_limited(Some(&body), Some("90"));
    assert_eq!(
        err,
        ApiError::RateLimited(RateLimitNotice {
            reset_time_seconds: 30,
            message: "slow down".to_owned(),
        })
    );
}

#[test]
fn rate_limit_falls_back_to_retry_after_header() {
    let body = serde_json::json!({ "reset_in_seconds": "not-a-number" });
    let err = ApiError::rate_limited(Some(&body), Some("90"));
    let ApiError::RateLimited(notice) = err else {
        panic!("expected rate limit error");
    };
    assert_eq!(notice.reset_time_seconds, 90);
    assert_eq!(notice.message, RATE_LIMIT_FALLBACK_MESSAGE);
}

#[test]
fn rate_limit_defaults_to_sixty_seconds() {
    let err = ApiError::rate_limited(None, None);
    let ApiError::RateLimited(notice) = err else {
        panic!("expected rate limit error");
    };
    assert_eq!(notice.reset_time_seconds, RATE_LIMIT_FALLBACK_SECONDS);
}

#[test]
fn http_error_consults_detail_message_and_error_fields() {
    let detail = serde_json::json!({ "detail": "bad payload" });
    let message = serde_json::json!({ "message": "missing field" });
    let error = serde_json::json!({ "error": "nope" });
    assert_eq!(
        ApiError::http(400, Some(&detail), "fallback"),
        ApiError::Http { status: 400, message: "bad payload".to_owned() }
    );
    assert_eq!(
        ApiError::http(400, Some(&message), "fallback"),
        ApiError::Http { status: 400, message: "missing field".to_owned() }
    );
    assert_eq!(
        ApiError::http(400, Some(&error), "fallback"),
        ApiError::Http { status: 400, message: "nope".to_owned() }
    );
    assert_eq!(
        ApiError::http(500, None, "fallback"),
        ApiError::Http { status: 500, message: "fallback".to_owned() }
    );
}

#[test]
fn unauthorized_is_flagged_for_session_invalidation() {
    assert!(ApiError::Unauthorized.is_unauthorized());
    assert!(!ApiError::Validation("x".into()).is_unauthorized());
}
