//! Shared UI components.

pub mod badges;
pub mod bar_chart;
pub mod confirm_dialog;
pub mod contact_dialog;
pub mod error_banner;
pub mod heatmap;
pub mod nav_bar;
pub mod pagination;
pub mod pie_chart;
pub mod rate_limit_snackbar;
pub mod stats_card;
