//! Persisted auth session: bearer token and cached user profile.
//!
//! DESIGN
//! ======
//! The token lives in localStorage under `token` and the profile JSON under
//! `user`, matching what the backend's login flow has always written. The
//! HTTP client re-reads the token per request and calls [`clear_persisted`]
//! on a 401; pages react to the typed [`crate::net::error::ApiError::Unauthorized`]
//! by routing to the login screen rather than reloading the document.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::UserProfile;

/// localStorage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// localStorage key holding the serialized [`UserProfile`].
pub const USER_KEY: &str = "user";

/// In-memory view of the persisted session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl Session {
    /// Hydrate from raw storage values.
    pub fn from_stored(token: Option<String>, user_json: Option<&str>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
            user: user_json.and_then(parse_user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Whether the signed-in user may edit templates inline.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(UserProfile::is_admin)
    }

    /// Apply a successful login response.
    pub fn sign_in(&mut self, token: String, user: UserProfile) {
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Drop the in-memory session after a 401 or explicit logout.
    pub fn invalidate(&mut self) {
        self.token = None;
        self.user = None;
    }
}

/// Parse a stored profile, tolerating junk left by older deployments.
fn parse_user(raw: &str) -> Option<UserProfile> {
    serde_json::from_str(raw).ok()
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the persisted bearer token, if any.
#[cfg(feature = "hydrate")]
pub fn stored_token() -> Option<String> {
    local_storage()?
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|t| !t.trim().is_empty())
}

#[cfg(not(feature = "hydrate"))]
pub fn stored_token() -> Option<String> {
    None
}

/// Load the full persisted session.
#[cfg(feature = "hydrate")]
pub fn load_persisted() -> Session {
    let user_json = local_storage().and_then(|s| s.get_item(USER_KEY).ok().flatten());
    Session::from_stored(stored_token(), user_json.as_deref())
}

#[cfg(not(feature = "hydrate"))]
pub fn load_persisted() -> Session {
    Session::default()
}

/// Write both session keys after a successful login.
#[cfg(feature = "hydrate")]
pub fn persist(token: &str, user: &UserProfile) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn persist(_token: &str, _user: &UserProfile) {}

/// Remove both session keys. Called by the HTTP client on a 401.
#[cfg(feature = "hydrate")]
pub fn clear_persisted() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn clear_persisted() {}
