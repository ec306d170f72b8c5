//! Request error taxonomy for the shared HTTP client.
//!
//! ERROR HANDLING
//! ==============
//! 401 and 429 are normalized here so every service reports them the same
//! way; pages decide whether an error is an inline message, a dismissible
//! banner, or a session invalidation. There is no retry logic anywhere —
//! every failed request requires explicit user re-action.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Fallback advisory shown when the server's 429 body has no message.
pub const RATE_LIMIT_FALLBACK_MESSAGE: &str = "You have exceeded your request limit.";

/// Seconds to wait when neither the body nor the header names a reset time.
pub const RATE_LIMIT_FALLBACK_SECONDS: u32 = 60;

/// Normalized rate-limit advisory carried by [`ApiError::RateLimited`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimitNotice {
    pub reset_time_seconds: u32,
    pub message: String,
}

/// Errors surfaced by the HTTP client and domain services.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The session token was rejected; the session layer clears storage.
    #[error("authentication failed")]
    Unauthorized,
    /// The server throttled the request; advisory, not destructive.
    #[error("{}", .0.message)]
    RateLimited(RateLimitNotice),
    /// A non-2xx response with the server's error message when present.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// The request never reached the server or the body failed to parse.
    #[error("network error: {0}")]
    Network(String),
    /// A client-side business rule rejected the action before any call.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Build the normalized 429 advisory from the response body and the
    /// `Retry-After` header. A numeric `reset_in_seconds` body field wins;
    /// the header is the fallback, then a fixed 60 seconds.
    pub fn rate_limited(body: Option<&serde_json::Value>, retry_after: Option<&str>) -> Self {
        let reset_time_seconds = body
            .and_then(|b| b.get("reset_in_seconds"))
            .and_then(serde_json::Value::as_u64)
            .and_then(|secs| u32::try_from(secs).ok())
            .or_else(|| retry_after.and_then(|header| header.trim().parse().ok()))
            .unwrap_or(RATE_LIMIT_FALLBACK_SECONDS);
        let message = body
            .and_then(|b| b.get("message"))
            .and_then(serde_json::Value::as_str)
            .unwrap_or(RATE_LIMIT_FALLBACK_MESSAGE)
            .to_owned();
        Self::RateLimited(RateLimitNotice { reset_time_seconds, message })
    }

    /// Build an HTTP error, preferring the server's own error text.
    ///
    /// The backend is inconsistent about the field name, so `detail`,
    /// `message`, and `error` are all consulted before the fallback.
    pub fn http(status: u16, body: Option<&serde_json::Value>, fallback: &str) -> Self {
        let message = body
            .and_then(|b| {
                ["detail", "message", "error"]
                    .iter()
                    .find_map(|key| b.get(key).and_then(serde_json::Value::as_str))
            })
            .unwrap_or(fallback)
            .to_owned();
        Self::Http { status, message }
    }

    /// Whether this error should invalidate the current session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
