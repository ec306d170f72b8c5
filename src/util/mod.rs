//! Shared pure helpers: severity mapping, chart geometry, and export
//! serialization. Only `download` touches the browser.

pub mod chart;
pub mod csv;
pub mod download;
pub mod export;
pub mod severity;
