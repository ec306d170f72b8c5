//! Colored badges for severity levels and lifecycle statuses.

use leptos::prelude::*;

use crate::net::types::{ControlStatus, RiskStatus};
use crate::util::severity::{SeverityLevel, severity_badge_text};

/// Severity badge showing the level name with the numeric rating.
#[component]
pub fn SeverityBadge(severity: i32) -> impl IntoView {
    let level = SeverityLevel::from_severity(severity);
    view! {
        <span class="badge" style=format!("background-color:{}", level.color())>
            {severity_badge_text(severity)}
        </span>
    }
}

/// Risk lifecycle status badge.
#[component]
pub fn RiskStatusBadge(status: RiskStatus) -> impl IntoView {
    let class = match status {
        RiskStatus::Completed => "badge badge--completed",
        RiskStatus::Pending => "badge badge--pending",
        RiskStatus::Rejected => "badge badge--rejected",
    };
    view! { <span class=class>{status.as_str()}</span> }
}

/// Control implementation status badge.
#[component]
pub fn ControlStatusBadge(status: ControlStatus) -> impl IntoView {
    let class = match status {
        ControlStatus::Implemented => "badge badge--implemented",
        ControlStatus::InProgress => "badge badge--in-progress",
        ControlStatus::NotImplemented => "badge badge--not-implemented",
    };
    view! { <span class=class>{status.as_str()}</span> }
}
