//! Governance scoring endpoints.

#[cfg(test)]
#[path = "governance_test.rs"]
mod governance_test;

use crate::config::backend_url;
use crate::net::error::ApiError;
use crate::net::http::{self, QueryParams};
use crate::net::types::{GovernanceScores, GovernanceStatistics};

/// `/governance/{projectId}/history` URL with an optional result cap.
pub fn history_endpoint(project_id: &str, limit: Option<u32>) -> String {
    let mut params = QueryParams::new();
    if let Some(limit) = limit {
        params.push("limit", limit);
    }
    format!("/governance/{project_id}/history{}", params.to_query_string())
}

#[cfg(feature = "hydrate")]
mod fetch {
    use super::*;

    pub async fn scores(project_id: &str) -> Result<GovernanceScores, ApiError> {
        let url = backend_url(&format!("/governance/{project_id}/scores"));
        http::get_json(&url, "Failed to fetch governance scores").await
    }

    pub async fn history(
        project_id: &str,
        limit: Option<u32>,
    ) -> Result<Vec<GovernanceScores>, ApiError> {
        let url = backend_url(&history_endpoint(project_id, limit));
        http::get_json(&url, "Failed to fetch governance history").await
    }

    pub async fn recalculate(project_id: &str) -> Result<GovernanceScores, ApiError> {
        let url = backend_url(&format!("/governance/{project_id}/recalculate"));
        http::post_json(&url, &serde_json::json!({}), "Failed to recalculate scores").await
    }

    pub async fn statistics() -> Result<GovernanceStatistics, ApiError> {
        let url = backend_url("/governance/statistics");
        http::get_json(&url, "Failed to fetch governance statistics").await
    }
}

#[cfg(not(feature = "hydrate"))]
mod fetch {
    use super::*;

    pub async fn scores(_: &str) -> Result<GovernanceScores, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn history(_: &str, _: Option<u32>) -> Result<Vec<GovernanceScores>, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn recalculate(_: &str) -> Result<GovernanceScores, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn statistics() -> Result<GovernanceStatistics, ApiError> {
        http::server_side_unavailable()
    }
}

pub use fetch::{history, recalculate, scores, statistics};
