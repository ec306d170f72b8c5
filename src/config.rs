//! Environment URL builders for the backend and agent services.
//!
//! DESIGN
//! ======
//! Base URLs default to the relative paths served by the production Nginx
//! frontend (`/api` and `/agent`). Absolute overrides are supported so a
//! development build can point at locally running services.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default backend base path behind the production reverse proxy.
pub const DEFAULT_BACKEND_BASE: &str = "/api";

/// Default agent-service base path behind the production reverse proxy.
pub const DEFAULT_AGENT_BASE: &str = "/agent";

/// Application display name.
pub const APP_NAME: &str = "AI Governance";

/// Join a base URL and an endpoint path, normalizing the separating slash.
fn join_url(base: &str, endpoint: &str) -> String {
    let base = base.trim_end_matches('/');
    if endpoint.is_empty() {
        return base.to_owned();
    }
    if endpoint.starts_with('/') {
        format!("{base}{endpoint}")
    } else {
        format!("{base}/{endpoint}")
    }
}

/// Full backend URL for an endpoint path, honoring an optional override.
pub fn backend_url_with_base(base: Option<&str>, endpoint: &str) -> String {
    join_url(base.unwrap_or(DEFAULT_BACKEND_BASE), endpoint)
}

/// Full backend URL for an endpoint path using the configured base.
pub fn backend_url(endpoint: &str) -> String {
    backend_url_with_base(configured_base("GRC_BACKEND_URL").as_deref(), endpoint)
}

/// Full agent-service URL for an endpoint path using the configured base.
///
/// The deployment fronts a second, agent service next to the backend; no
/// client feature calls it today, so this builder is the whole surface.
pub fn agent_url(endpoint: &str) -> String {
    join_url(
        configured_base("GRC_AGENT_URL")
            .as_deref()
            .unwrap_or(DEFAULT_AGENT_BASE),
        endpoint,
    )
}

/// Read a base-URL override injected at build/deploy time.
///
/// In the browser this comes from a `<meta>`-style global set by the host
/// page; on the server there is nothing to read.
fn configured_base(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let value = js_sys::Reflect::get(&js_sys::global(), &wasm_bindgen::JsValue::from_str(key))
            .ok()?
            .as_string()?;
        if value.trim().is_empty() { None } else { Some(value) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}
