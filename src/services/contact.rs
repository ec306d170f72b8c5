//! Support-request endpoint behind the contact dialog.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

use crate::config::backend_url;
use crate::net::error::ApiError;
use crate::net::http;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SupportRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl SupportRequest {
    /// Every field is required before the dialog enables its send button.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.subject.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}

#[cfg(feature = "hydrate")]
pub async fn send(request: &SupportRequest) -> Result<serde_json::Value, ApiError> {
    http::post_json(&backend_url("/contact"), request, "Failed to send message.").await
}

#[cfg(not(feature = "hydrate"))]
pub async fn send(_: &SupportRequest) -> Result<serde_json::Value, ApiError> {
    http::server_side_unavailable()
}
