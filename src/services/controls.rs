//! Compliance control endpoints.

#[cfg(test)]
#[path = "controls_test.rs"]
mod controls_test;

use crate::config::backend_url;
use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::{Control, ControlPage, SystemType};

/// `/controls/type` listing URL; the filter query comes from
/// [`crate::state::controls::ControlTable::fetch_query`].
pub fn list_by_type_endpoint(system: SystemType, filter_query: &str) -> String {
    let filters = filter_query.trim_start_matches('?');
    if filters.is_empty() {
        format!("/controls/type?type={}", system.as_query())
    } else {
        format!("/controls/type?type={}&{filters}", system.as_query())
    }
}

#[cfg(feature = "hydrate")]
mod fetch {
    use super::*;

    pub async fn list_by_type(
        system: SystemType,
        filter_query: &str,
    ) -> Result<ControlPage, ApiError> {
        let url = backend_url(&list_by_type_endpoint(system, filter_query));
        http::get_json(&url, "Failed to fetch controls by system type").await
    }

    pub async fn update(id: &str, body: &serde_json::Value) -> Result<Control, ApiError> {
        let url = backend_url(&format!("/controls/{id}"));
        http::put_json(&url, body, "Failed to update control").await
    }

    pub async fn delete(id: &str) -> Result<serde_json::Value, ApiError> {
        let url = backend_url(&format!("/controls/{id}"));
        http::delete_json(&url, "Failed to delete control").await
    }

    pub async fn store_bulk(controls: &[Control]) -> Result<serde_json::Value, ApiError> {
        http::post_json(&backend_url("/controls/"), &controls, "Failed to store controls").await
    }
}

#[cfg(not(feature = "hydrate"))]
mod fetch {
    use super::*;

    pub async fn list_by_type(_: SystemType, _: &str) -> Result<ControlPage, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn update(_: &str, _: &serde_json::Value) -> Result<Control, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn delete(_: &str) -> Result<serde_json::Value, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn store_bulk(_: &[Control]) -> Result<serde_json::Value, ApiError> {
        http::server_side_unavailable()
    }
}

pub use fetch::{delete, list_by_type, store_bulk, update};
