//! Third-party vendor endpoints.

#[cfg(test)]
#[path = "thirdparty_test.rs"]
mod thirdparty_test;

use crate::config::backend_url;
use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::ThirdParty;

/// Listing is addressed by project id; update and delete take the record id
/// on the same path.
pub fn thirdparty_endpoint(id: &str) -> String {
    format!("/thirdparty/{id}")
}

#[cfg(feature = "hydrate")]
mod fetch {
    use super::*;

    pub async fn for_project(project_id: &str) -> Result<Vec<ThirdParty>, ApiError> {
        let url = backend_url(&thirdparty_endpoint(project_id));
        http::get_json(&url, "Failed to fetch third parties").await
    }

    pub async fn create(third_party: &ThirdParty) -> Result<ThirdParty, ApiError> {
        let url = backend_url("/thirdparty/");
        http::post_json(&url, third_party, "Failed to create third party").await
    }

    pub async fn update(id: &str, body: &serde_json::Value) -> Result<ThirdParty, ApiError> {
        let url = backend_url(&thirdparty_endpoint(id));
        http::put_json(&url, body, "Failed to update third party").await
    }

    pub async fn delete(id: &str) -> Result<serde_json::Value, ApiError> {
        let url = backend_url(&thirdparty_endpoint(id));
        http::delete_json(&url, "Failed to delete third party").await
    }
}

#[cfg(not(feature = "hydrate"))]
mod fetch {
    use super::*;

    pub async fn for_project(_: &str) -> Result<Vec<ThirdParty>, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn create(_: &ThirdParty) -> Result<ThirdParty, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn update(_: &str, _: &serde_json::Value) -> Result<ThirdParty, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn delete(_: &str) -> Result<serde_json::Value, ApiError> {
        http::server_side_unavailable()
    }
}

pub use fetch::{create, delete, for_project, update};
