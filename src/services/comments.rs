//! Project comment endpoints, including multipart attachment upload.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use serde::Deserialize;

use crate::config::backend_url;
use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::Comment;

/// The backend moved to a `{success, data}` envelope; older deployments
/// return the bare array. Both shapes are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CommentListBody {
    Envelope {
        #[allow(dead_code)]
        success: bool,
        data: Vec<Comment>,
    },
    Plain(Vec<Comment>),
}

/// Flatten either response shape into the comment list.
pub fn normalize_list(body: CommentListBody) -> Vec<Comment> {
    match body {
        CommentListBody::Envelope { data, .. } | CommentListBody::Plain(data) => data,
    }
}

/// Single-comment envelope used by create/update.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CommentBody {
    Envelope {
        #[allow(dead_code)]
        success: bool,
        data: Comment,
    },
    Plain(Comment),
}

pub fn normalize_one(body: CommentBody) -> Comment {
    match body {
        CommentBody::Envelope { data, .. } | CommentBody::Plain(data) => data,
    }
}

#[cfg(feature = "hydrate")]
mod fetch {
    use super::*;

    /// List a project's comments. A 404 means the thread is empty, not an
    /// error.
    pub async fn list(project_id: &str) -> Result<Vec<Comment>, ApiError> {
        let url = backend_url(&format!("/comments/{project_id}"));
        match http::get_json::<CommentListBody>(&url, "Failed to fetch comments").await {
            Ok(body) => Ok(normalize_list(body)),
            Err(ApiError::Http { status: 404, .. }) => Ok(Vec::new()),
            Err(other) => Err(other),
        }
    }

    /// Post a comment with an optional single PDF attachment.
    pub async fn create(
        project_id: &str,
        text: &str,
        file: Option<&web_sys::File>,
    ) -> Result<Comment, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Network("failed to build form data".to_owned()))?;
        form.append_with_str("projectId", project_id)
            .and_then(|()| form.append_with_str("text", text.trim()))
            .map_err(|_| ApiError::Network("failed to build form data".to_owned()))?;
        if let Some(file) = file {
            form.append_with_blob_and_filename("attachment", file, &file.name())
                .map_err(|_| ApiError::Network("failed to attach file".to_owned()))?;
        }
        let body: CommentBody =
            http::post_form(&backend_url("/comments/"), &form, "Failed to save comment").await?;
        Ok(normalize_one(body))
    }

    /// Replace a comment's text and optionally its attachment.
    pub async fn update(
        comment_id: &str,
        text: &str,
        file: Option<&web_sys::File>,
    ) -> Result<Comment, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Network("failed to build form data".to_owned()))?;
        form.append_with_str("text", text.trim())
            .map_err(|_| ApiError::Network("failed to build form data".to_owned()))?;
        if let Some(file) = file {
            form.append_with_blob_and_filename("attachment", file, &file.name())
                .map_err(|_| ApiError::Network("failed to attach file".to_owned()))?;
        }
        let url = backend_url(&format!("/comments/{comment_id}"));
        let body: CommentBody = http::put_form(&url, &form, "Failed to update comment").await?;
        Ok(normalize_one(body))
    }

    pub async fn delete(comment_id: &str) -> Result<serde_json::Value, ApiError> {
        let url = backend_url(&format!("/comments/{comment_id}"));
        http::delete_json(&url, "Failed to delete comment").await
    }
}

#[cfg(not(feature = "hydrate"))]
mod fetch {
    use super::*;

    pub async fn list(_: &str) -> Result<Vec<Comment>, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn delete(_: &str) -> Result<serde_json::Value, ApiError> {
        http::server_side_unavailable()
    }
}

pub use fetch::*;
