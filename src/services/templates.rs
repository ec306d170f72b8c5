//! Template and template-response endpoints.

#[cfg(test)]
#[path = "templates_test.rs"]
mod templates_test;

use serde::Serialize;

use crate::config::backend_url;
use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::{Template, TemplateResponse};

/// `PATCH /template-responses/{id}/status` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResponseStatusUpdate {
    pub status: String,
}

pub fn template_endpoint(id: &str) -> String {
    format!("/templates/{id}")
}

pub fn responses_for_template_endpoint(template_id: &str) -> String {
    format!("/template-responses/template/{template_id}")
}

pub fn response_endpoint(id: &str) -> String {
    format!("/template-responses/{id}")
}

pub fn response_status_endpoint(id: &str) -> String {
    format!("/template-responses/{id}/status")
}

#[cfg(feature = "hydrate")]
mod fetch {
    use super::*;

    pub async fn list() -> Result<Vec<Template>, ApiError> {
        http::get_json(&backend_url("/templates"), "Failed to fetch templates").await
    }

    pub async fn get(id: &str) -> Result<Template, ApiError> {
        let url = backend_url(&template_endpoint(id));
        http::get_json(&url, "Failed to fetch template").await
    }

    pub async fn create(template: &Template) -> Result<Template, ApiError> {
        http::post_json(&backend_url("/templates"), template, "Failed to create template").await
    }

    pub async fn update(id: &str, template: &Template) -> Result<Template, ApiError> {
        let url = backend_url(&template_endpoint(id));
        http::put_json(&url, template, "Failed to update template").await
    }

    pub async fn delete(id: &str) -> Result<serde_json::Value, ApiError> {
        let url = backend_url(&template_endpoint(id));
        http::delete_json(&url, "Failed to delete template").await
    }

    pub async fn list_responses() -> Result<Vec<TemplateResponse>, ApiError> {
        http::get_json(&backend_url("/template-responses"), "Failed to fetch responses").await
    }

    pub async fn responses_for_template(
        template_id: &str,
    ) -> Result<Vec<TemplateResponse>, ApiError> {
        let url = backend_url(&responses_for_template_endpoint(template_id));
        http::get_json(&url, "Failed to fetch template responses").await
    }

    pub async fn get_response(id: &str) -> Result<TemplateResponse, ApiError> {
        let url = backend_url(&response_endpoint(id));
        http::get_json(&url, "Failed to fetch response").await
    }

    pub async fn submit_response(
        response: &TemplateResponse,
    ) -> Result<TemplateResponse, ApiError> {
        let url = backend_url("/template-responses");
        http::post_json(&url, response, "Failed to submit response").await
    }

    pub async fn update_response_status(
        id: &str,
        status: &str,
    ) -> Result<TemplateResponse, ApiError> {
        let url = backend_url(&response_status_endpoint(id));
        let body = ResponseStatusUpdate { status: status.to_owned() };
        http::patch_json(&url, &body, "Failed to update response status").await
    }

    pub async fn delete_response(id: &str) -> Result<serde_json::Value, ApiError> {
        let url = backend_url(&response_endpoint(id));
        http::delete_json(&url, "Failed to delete response").await
    }
}

#[cfg(not(feature = "hydrate"))]
mod fetch {
    use super::*;

    pub async fn list() -> Result<Vec<Template>, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn get(_: &str) -> Result<Template, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn create(_: &Template) -> Result<Template, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn update(_: &str, _: &Template) -> Result<Template, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn delete(_: &str) -> Result<serde_json::Value, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn list_responses() -> Result<Vec<TemplateResponse>, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn responses_for_template(_: &str) -> Result<Vec<TemplateResponse>, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn get_response(_: &str) -> Result<TemplateResponse, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn submit_response(_: &TemplateResponse) -> Result<TemplateResponse, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn update_response_status(_: &str, _: &str) -> Result<TemplateResponse, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn delete_response(_: &str) -> Result<serde_json::Value, ApiError> {
        http::server_side_unavailable()
    }
}

pub use fetch::{
    create, delete, delete_response, get, get_response, list, list_responses,
    responses_for_template, submit_response, update, update_response_status,
};
