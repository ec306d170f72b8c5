//! Questionnaire processing endpoints.

#[cfg(test)]
#[path = "questionnaire_test.rs"]
mod questionnaire_test;

use crate::config::backend_url;
use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::QuestionnaireSubmission;

pub fn status_endpoint(session_id: &str) -> String {
    format!("/questionnaire/status/{session_id}")
}

#[cfg(feature = "hydrate")]
mod fetch {
    use super::*;

    /// Submit the completed questionnaire for assessment generation.
    pub async fn process(
        submission: &QuestionnaireSubmission,
    ) -> Result<serde_json::Value, ApiError> {
        let url = backend_url("/questionnaire/process");
        http::post_json(&url, submission, "Failed to process questionnaire").await
    }

    /// Poll the processing status for a session. No page currently polls;
    /// kept for parity with the backend surface.
    pub async fn status(session_id: &str) -> Result<serde_json::Value, ApiError> {
        let url = backend_url(&status_endpoint(session_id));
        http::get_json(&url, "Failed to fetch questionnaire status").await
    }
}

#[cfg(not(feature = "hydrate"))]
mod fetch {
    use super::*;

    pub async fn process(_: &QuestionnaireSubmission) -> Result<serde_json::Value, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn status(_: &str) -> Result<serde_json::Value, ApiError> {
        http::server_side_unavailable()
    }
}

pub use fetch::{process, status};
