//! Static question sets, template fixtures, example data, and defaults.

pub mod examples;
pub mod questions;
pub mod templates;

/// Project id attached to questionnaire submissions that are not bound to a
/// specific project yet. Matches the id seeded by the backend test fixtures.
pub const DEFAULT_PROJECT_ID: &str = "507f1f77bcf86cd799439011";
