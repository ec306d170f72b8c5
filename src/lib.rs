//! # grc-console
//!
//! Leptos + WASM frontend for the AI/cybersecurity governance, risk, and
//! compliance platform. Renders dashboards, questionnaires, risk registers,
//! control-assessment tables, and template builders, and talks to the
//! backend over REST.
//!
//! This crate contains pages, components, application state, the shared
//! HTTP client, and typed domain services. All backend interaction is
//! asynchronous request/response; there is no polling and no websocket
//! traffic.

pub mod app;
pub mod components;
pub mod config;
pub mod constants;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
