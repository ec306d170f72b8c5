//! Client-side state: session persistence plus the per-page view models.
//!
//! Each page owns a plain-Rust state struct here; pages translate signal
//! updates into method calls on these structs so every transition rule is
//! unit-testable without a browser.

pub mod comments;
pub mod controls;
pub mod inventory;
pub mod questionnaire;
pub mod rate_limit;
pub mod risk_dashboard;
pub mod session;
pub mod templates;
