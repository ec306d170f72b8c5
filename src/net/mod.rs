//! Shared HTTP client, wire DTOs, and the request error taxonomy.
//!
//! ARCHITECTURE
//! ============
//! Every domain service goes through the one client in `http` so auth
//! injection and the global 401/429 handling live in exactly one place.

pub mod error;
pub mod http;
pub mod types;
