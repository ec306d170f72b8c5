//! The shared HTTP client used by every domain service.
//!
//! DESIGN
//! ======
//! The original deployment duplicated auth-injection and 401/429 handling
//! per service; here one client owns both. Client-side (hydrate) requests go
//! through `gloo-net`; on the server these helpers return an error since the
//! endpoints are only meaningful in the browser.
//!
//! A 401 clears the persisted session (token + cached user) before the error
//! reaches the caller, so the page layer only has to route the typed
//! invalidation. A 429 is normalized into [`ApiError::RateLimited`] for the
//! global snackbar. No request is retried or aborted; a stale response from a
//! superseded filter change can overwrite newer state (known race, accepted).

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

#[cfg(feature = "hydrate")]
use serde::Serialize;
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Incrementally built query string with form-urlencoded values.
#[derive(Clone, Debug, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one key/value pair unconditionally.
    pub fn push(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.pairs.push((key.to_owned(), value.to_string()));
        self
    }

    /// Append a pair only when the value is non-empty after trimming.
    pub fn push_non_empty(&mut self, key: &str, value: &str) -> &mut Self {
        if !value.trim().is_empty() {
            self.push(key, value.trim());
        }
        self
    }

    /// Append a filter value, skipping the `all` sentinel the dropdowns use.
    pub fn push_filter(&mut self, key: &str, value: &str) -> &mut Self {
        if value != "all" {
            self.push_non_empty(key, value);
        }
        self
    }

    /// Render as `?k=v&...`, or an empty string when no pairs were added.
    pub fn to_query_string(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let encoded: Vec<String> = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", form_urlencode(k), form_urlencode(v)))
            .collect();
        format!("?{}", encoded.join("&"))
    }
}

/// Minimal application/x-www-form-urlencoded encoding for query values.
fn form_urlencode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// GET a JSON resource.
#[cfg(feature = "hydrate")]
pub async fn get_json<T: DeserializeOwned>(url: &str, fallback: &str) -> Result<T, ApiError> {
    let request = gloo_net::http::Request::get(url);
    send_json(authorized(request), fallback).await
}

/// POST a JSON body and parse a JSON response.
#[cfg(feature = "hydrate")]
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
    fallback: &str,
) -> Result<T, ApiError> {
    let request = authorized(gloo_net::http::Request::post(url))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    dispatch(request, fallback).await
}

/// PUT a JSON body and parse a JSON response.
#[cfg(feature = "hydrate")]
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
    fallback: &str,
) -> Result<T, ApiError> {
    let request = authorized(gloo_net::http::Request::put(url))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    dispatch(request, fallback).await
}

/// PATCH a JSON body and parse a JSON response.
#[cfg(feature = "hydrate")]
pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
    fallback: &str,
) -> Result<T, ApiError> {
    let request = authorized(gloo_net::http::Request::patch(url))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    dispatch(request, fallback).await
}

/// DELETE a resource and parse a JSON response.
#[cfg(feature = "hydrate")]
pub async fn delete_json<T: DeserializeOwned>(url: &str, fallback: &str) -> Result<T, ApiError> {
    let request = gloo_net::http::Request::delete(url);
    send_json(authorized(request), fallback).await
}

/// POST multipart form data (comment attachments) and parse a JSON response.
#[cfg(feature = "hydrate")]
pub async fn post_form<T: DeserializeOwned>(
    url: &str,
    form: &web_sys::FormData,
    fallback: &str,
) -> Result<T, ApiError> {
    let request = authorized(gloo_net::http::Request::post(url))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    dispatch(request, fallback).await
}

/// PUT multipart form data and parse a JSON response.
#[cfg(feature = "hydrate")]
pub async fn put_form<T: DeserializeOwned>(
    url: &str,
    form: &web_sys::FormData,
    fallback: &str,
) -> Result<T, ApiError> {
    let request = authorized(gloo_net::http::Request::put(url))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    dispatch(request, fallback).await
}

/// Attach the bearer token from persisted storage, when present.
///
/// The token is re-read on every request so a login in another tab is
/// picked up without a reload.
#[cfg(feature = "hydrate")]
fn authorized(request: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::state::session::stored_token() {
        Some(token) => request.header("Authorization", &format!("Bearer {token}")),
        None => request,
    }
}

#[cfg(feature = "hydrate")]
async fn send_json<T: DeserializeOwned>(
    request: gloo_net::http::RequestBuilder,
    fallback: &str,
) -> Result<T, ApiError> {
    let request = request.build().map_err(|e| ApiError::Network(e.to_string()))?;
    dispatch(request, fallback).await
}

#[cfg(feature = "hydrate")]
async fn dispatch<T: DeserializeOwned>(
    request: gloo_net::http::Request,
    fallback: &str,
) -> Result<T, ApiError> {
    let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = response.status();

    if status == 401 {
        crate::state::session::clear_persisted();
        return Err(ApiError::Unauthorized);
    }

    if status == 429 {
        let body = response.json::<serde_json::Value>().await.ok();
        let retry_after = response.headers().get("retry-after");
        return Err(ApiError::rate_limited(body.as_ref(), retry_after.as_deref()));
    }

    if !response.ok() {
        let body = response.json::<serde_json::Value>().await.ok();
        return Err(ApiError::http(status, body.as_ref(), fallback));
    }

    response.json::<T>().await.map_err(|e| ApiError::Network(e.to_string()))
}

/// Server-side stub shared by the service layer's non-hydrate builds.
pub fn server_side_unavailable<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("not available on server".to_owned()))
}
