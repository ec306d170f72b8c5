//! Typed REST services over the shared HTTP client.
//!
//! SYSTEM CONTEXT
//! ==============
//! One module per backend resource family. Endpoint paths and query strings
//! are built by plain functions so they stay testable natively; the async
//! fetch wrappers are browser-only and compile to stubs on the server.

pub mod auth;
pub mod comments;
pub mod contact;
pub mod controls;
pub mod elements;
pub mod governance;
pub mod questionnaire;
pub mod risks;
pub mod templates;
pub mod thirdparty;
