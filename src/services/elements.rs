//! Data element endpoints.

#[cfg(test)]
#[path = "elements_test.rs"]
mod elements_test;

use serde::Serialize;

use crate::config::backend_url;
use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::DataElement;

/// `POST /elements/` body for a single element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewElement {
    pub project_id: String,
    pub category: String,
    pub element_name: String,
}

/// `POST /elements/bulk` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkElements {
    pub project_id: String,
    pub elements: Vec<DataElement>,
}

#[cfg(feature = "hydrate")]
mod fetch {
    use super::*;

    pub async fn for_project(project_id: &str) -> Result<Vec<DataElement>, ApiError> {
        let url = backend_url(&format!("/elements/{project_id}"));
        http::get_json(&url, "Failed to fetch data elements").await
    }

    pub async fn save(element: &NewElement) -> Result<DataElement, ApiError> {
        http::post_json(&backend_url("/elements/"), element, "Failed to save data element").await
    }

    pub async fn save_bulk(bulk: &BulkElements) -> Result<serde_json::Value, ApiError> {
        http::post_json(&backend_url("/elements/bulk"), bulk, "Failed to save data elements").await
    }
}

#[cfg(not(feature = "hydrate"))]
mod fetch {
    use super::*;

    pub async fn for_project(_: &str) -> Result<Vec<DataElement>, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn save(_: &NewElement) -> Result<DataElement, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn save_bulk(_: &BulkElements) -> Result<serde_json::Value, ApiError> {
        http::server_side_unavailable()
    }
}

pub use fetch::{for_project, save, save_bulk};
