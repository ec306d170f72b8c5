//! Risk assessment endpoints.

#[cfg(test)]
#[path = "risks_test.rs"]
mod risks_test;

use serde::Serialize;

use crate::config::backend_url;
use crate::net::error::ApiError;
use crate::net::http::{self, QueryParams};
use crate::net::types::{Risk, RiskPage, RiskStats, RiskStatus, SystemType};
use crate::state::risk_dashboard::NewRiskPayload;

/// `/risks/type` listing URL for a system type plus a filter query built by
/// [`crate::state::risk_dashboard::RiskFilters`].
pub fn list_by_type_endpoint(system: SystemType, filter_query: &str) -> String {
    let filters = filter_query.trim_start_matches('?');
    if filters.is_empty() {
        format!("/risks/type?type={}", system.as_query())
    } else {
        format!("/risks/type?type={}&{filters}", system.as_query())
    }
}

/// `/risks/project/{id}` listing URL with optional paging.
pub fn list_by_project_endpoint(project_id: &str, page: Option<u32>, limit: Option<u32>) -> String {
    let mut params = QueryParams::new();
    if let Some(page) = page {
        params.push("page", page);
    }
    if let Some(limit) = limit {
        params.push("limit", limit);
    }
    format!("/risks/project/{project_id}{}", params.to_query_string())
}

/// `/risks/stats/summary` URL with an optional project filter.
pub fn stats_endpoint(project_id: Option<&str>) -> String {
    let mut params = QueryParams::new();
    if let Some(project_id) = project_id {
        params.push_non_empty("projectId", project_id);
    }
    format!("/risks/stats/summary{}", params.to_query_string())
}

/// `PATCH /risks/{riskAssessmentId}/status` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub project_id: String,
    pub status: RiskStatus,
}

#[cfg(feature = "hydrate")]
mod fetch {
    use super::*;

    pub async fn list_by_type(
        system: SystemType,
        filter_query: &str,
    ) -> Result<RiskPage, ApiError> {
        let url = backend_url(&list_by_type_endpoint(system, filter_query));
        http::get_json(&url, "Failed to fetch risks by system type").await
    }

    pub async fn list_by_project(
        project_id: &str,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<RiskPage, ApiError> {
        let url = backend_url(&list_by_project_endpoint(project_id, page, limit));
        http::get_json(&url, "Failed to fetch project risks").await
    }

    pub async fn stats(project_id: Option<&str>) -> Result<RiskStats, ApiError> {
        let url = backend_url(&stats_endpoint(project_id));
        http::get_json(&url, "Failed to fetch risk statistics").await
    }

    pub async fn add(payload: &NewRiskPayload) -> Result<Risk, ApiError> {
        http::post_json(&backend_url("/risks"), payload, "Failed to add risk").await
    }

    pub async fn store_bulk(risks: &[Risk]) -> Result<serde_json::Value, ApiError> {
        http::post_json(&backend_url("/risks/bulk"), &risks, "Failed to store risks").await
    }

    pub async fn update(risk_id: &str, body: &serde_json::Value) -> Result<Risk, ApiError> {
        let url = backend_url(&format!("/risks/{risk_id}"));
        http::put_json(&url, body, "Failed to update risk").await
    }

    pub async fn update_status(
        risk_assessment_id: &str,
        update: &StatusUpdate,
    ) -> Result<Risk, ApiError> {
        let url = backend_url(&format!("/risks/{risk_assessment_id}/status"));
        http::patch_json(&url, update, "Failed to update risk status").await
    }

    // No UI currently offers deletion; the endpoint is kept for parity with
    // the backend surface.
    pub async fn delete(risk_id: &str) -> Result<serde_json::Value, ApiError> {
        let url = backend_url(&format!("/risks/{risk_id}"));
        http::delete_json(&url, "Failed to delete risk").await
    }
}

#[cfg(not(feature = "hydrate"))]
mod fetch {
    use super::*;

    pub async fn list_by_type(_: SystemType, _: &str) -> Result<RiskPage, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn list_by_project(
        _: &str,
        _: Option<u32>,
        _: Option<u32>,
    ) -> Result<RiskPage, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn stats(_: Option<&str>) -> Result<RiskStats, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn add(_: &NewRiskPayload) -> Result<Risk, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn store_bulk(_: &[Risk]) -> Result<serde_json::Value, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn update(_: &str, _: &serde_json::Value) -> Result<Risk, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn update_status(_: &str, _: &StatusUpdate) -> Result<Risk, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn delete(_: &str) -> Result<serde_json::Value, ApiError> {
        http::server_side_unavailable()
    }
}

pub use fetch::{add, delete, list_by_project, list_by_type, stats, store_bulk, update, update_status};
