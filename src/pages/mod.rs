//! Page components, one module per route.
//!
//! ERROR HANDLING
//! ==============
//! Pages funnel every [`ApiError`] through [`route_error`]: a 401
//! invalidates the shared session (the login redirect effect does the
//! rest), a 429 feeds the global snackbar, and anything else comes back as
//! a banner message for the page to display.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod control_assessment;
pub mod home;
pub mod inventory;
pub mod login;
pub mod project;
pub mod questionnaire;
pub mod risk_dashboard;
pub mod templates;

use leptos::prelude::*;

use crate::net::error::{ApiError, RateLimitNotice};
use crate::state::rate_limit::RateLimitState;
use crate::state::session::Session;

/// Where a failed request surfaces in the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorRoute {
    /// Destructive: drop the session and let the login redirect fire.
    InvalidateSession,
    /// Advisory: show the global snackbar.
    RateLimit(RateLimitNotice),
    /// Everything else: a dismissible page banner.
    Banner(String),
}

/// Classify an error per the taxonomy above.
pub fn classify_error(error: &ApiError) -> ErrorRoute {
    match error {
        ApiError::Unauthorized => ErrorRoute::InvalidateSession,
        ApiError::RateLimited(notice) => ErrorRoute::RateLimit(notice.clone()),
        other => ErrorRoute::Banner(other.to_string()),
    }
}

/// Apply the classification to the shared state; returns the banner
/// message when the page should show one itself.
pub fn route_error(
    error: &ApiError,
    session: RwSignal<Session>,
    rate_limit: RwSignal<RateLimitState>,
) -> Option<String> {
    match classify_error(error) {
        ErrorRoute::InvalidateSession => {
            session.update(Session::invalidate);
            None
        }
        ErrorRoute::RateLimit(notice) => {
            rate_limit.update(|state| state.activate(notice));
            None
        }
        ErrorRoute::Banner(message) => Some(message),
    }
}
