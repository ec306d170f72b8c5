//! Authentication endpoints backing the login page.
//!
//! The auth backend is treated as opaque: this module only exchanges
//! credentials for a token and persists the session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::Serialize;

use crate::config::backend_url;
use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::{LoginResponse, UserProfile};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

#[cfg(feature = "hydrate")]
mod fetch {
    use super::*;

    /// Exchange credentials for a session and persist it on success.
    pub async fn login(credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse =
            http::post_json(&backend_url("/auth/login"), credentials, "Login failed").await?;
        crate::state::session::persist(&response.token, &response.user);
        Ok(response)
    }

    pub async fn profile() -> Result<UserProfile, ApiError> {
        http::get_json(&backend_url("/auth/profile"), "Failed to fetch profile").await
    }
}

#[cfg(not(feature = "hydrate"))]
mod fetch {
    use super::*;

    pub async fn login(_: &Credentials) -> Result<LoginResponse, ApiError> {
        http::server_side_unavailable()
    }

    pub async fn profile() -> Result<UserProfile, ApiError> {
        http::server_side_unavailable()
    }
}

pub use fetch::{login, profile};
