//! Filters and client-side derivations for the risk dashboards.
//!
//! DESIGN
//! ======
//! Listing is server-paginated; every filter or search change resets the
//! page to 1 before the fetch so the result window can never point past the
//! filtered set. The charts are derived from whatever page of risks is
//! currently loaded, never from a separate fetch.
//!
//! The heatmap derives both impact and probability from the one severity
//! rating, so populated cells always sit on the diagonal. That mirrors the
//! backend's current data model, which has no separate likelihood field.

#[cfg(test)]
#[path = "risk_dashboard_test.rs"]
mod risk_dashboard_test;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::net::http::QueryParams;
use crate::net::types::{Risk, RiskStatus};
use crate::util::severity::SeverityLevel;

/// Server page size for the risk tables.
pub const PAGE_LIMIT: u32 = 10;
/// Fallback export window when the filtered total is unknown.
pub const EXPORT_LIMIT: u32 = 1000;

/// Current filter selections; `all` is the dropdown sentinel and is never
/// sent to the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RiskFilters {
    pub page: u32,
    pub search: String,
    pub project: String,
    pub status: String,
}

impl Default for RiskFilters {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            project: "all".to_owned(),
            status: "all".to_owned(),
        }
    }
}

impl RiskFilters {
    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_owned();
        self.page = 1;
    }

    pub fn set_project(&mut self, project: &str) {
        self.project = project.to_owned();
        self.page = 1;
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_owned();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Query string for the paginated list fetch.
    pub fn list_query(&self) -> String {
        self.query_with_window(self.page, PAGE_LIMIT)
    }

    /// Query string for an export fetch covering the whole filtered set.
    pub fn export_query(&self, known_total: Option<u32>) -> String {
        let limit = known_total.filter(|t| *t > 0).unwrap_or(EXPORT_LIMIT);
        self.query_with_window(1, limit)
    }

    fn query_with_window(&self, page: u32, limit: u32) -> String {
        let mut params = QueryParams::new();
        params
            .push("page", page)
            .push("limit", limit)
            .push_non_empty("search", &self.search)
            .push_filter("projectId", &self.project)
            .push_filter("status", &self.status)
            .push("sortBy", "createdAt")
            .push("sortOrder", "desc");
        params.to_query_string()
    }
}

/// Severity pie input: `(label, count, color)` with empty buckets dropped.
pub fn pie_buckets(risks: &[Risk]) -> Vec<(String, u32, String)> {
    let mut counts: BTreeMap<u8, u32> = BTreeMap::new();
    for risk in risks {
        let level = match risk.severity {
            s if s >= 5 => SeverityLevel::Critical,
            4 => SeverityLevel::High,
            3 => SeverityLevel::Medium,
            2 => SeverityLevel::Low,
            // Sub-Low ratings are excluded from the pie entirely.
            _ => continue,
        };
        *counts.entry(level as u8).or_default() += 1;
    }
    [
        SeverityLevel::Critical,
        SeverityLevel::High,
        SeverityLevel::Medium,
        SeverityLevel::Low,
    ]
    .into_iter()
    .filter_map(|level| {
        let count = counts.get(&(level as u8)).copied()?;
        Some((level.label().to_owned(), count, level.color().to_owned()))
    })
    .collect()
}

/// Mitigation progress counts for the strategy card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StrategyProgress {
    pub completed: u32,
    pub pending: u32,
    pub rejected: u32,
    pub total: u32,
}

impl StrategyProgress {
    pub fn completed_percent(self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.completed) / f64::from(self.total) * 100.0
        }
    }
}

pub fn strategy_progress(risks: &[Risk]) -> StrategyProgress {
    let mut progress = StrategyProgress::default();
    for risk in risks {
        progress.total += 1;
        match risk.status {
            RiskStatus::Completed => progress.completed += 1,
            RiskStatus::Pending => progress.pending += 1,
            RiskStatus::Rejected => progress.rejected += 1,
        }
    }
    progress
}

/// 5x5 count grid indexed `[impact - 1][probability - 1]`. Impact and
/// probability both come from severity, clamped into 1..=5.
pub fn heatmap_cells(risks: &[Risk]) -> [[u32; 5]; 5] {
    let mut cells = [[0_u32; 5]; 5];
    for risk in risks {
        let index = usize::try_from(risk.severity.clamp(1, 5) - 1).unwrap_or(0);
        cells[index][index] += 1;
    }
    cells
}

/// Per-project averages for the bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectBar {
    pub project: String,
    pub count: u32,
    pub avg_severity: f64,
    pub avg_residual: f64,
    pub avg_target: f64,
}

pub fn project_bars(risks: &[Risk]) -> Vec<ProjectBar> {
    let mut grouped: BTreeMap<String, (u32, f64, f64, f64)> = BTreeMap::new();
    for risk in risks {
        let key = risk
            .project_id
            .clone()
            .unwrap_or_else(|| "Unassigned".to_owned());
        let entry = grouped.entry(key).or_default();
        entry.0 += 1;
        entry.1 += f64::from(risk.severity);
        entry.2 += risk.residual_score;
        entry.3 += risk.target_score;
    }
    grouped
        .into_iter()
        .map(|(project, (count, severity, residual, target))| {
            let n = f64::from(count);
            ProjectBar {
                project,
                count,
                avg_severity: severity / n,
                avg_residual: residual / n,
                avg_target: target / n,
            }
        })
        .collect()
}

/// Gate for the status dropdown: a risk without a project cannot be
/// updated, and the page shows this message instead of calling the server.
pub fn status_update_guard(risk: &Risk) -> Result<(), String> {
    match risk.project_id.as_deref() {
        Some(p) if !p.trim().is_empty() => Ok(()),
        _ => Err(format!(
            "Risk {} has no linked project, so its status cannot be updated.",
            risk.risk_assessment_id
        )),
    }
}

/// Optimistically patch the local list after a status PATCH is issued.
pub fn apply_status_locally(risks: &mut [Risk], risk_id: &str, status: RiskStatus) {
    if let Some(risk) = risks.iter_mut().find(|r| r.id == risk_id) {
        risk.status = status;
    }
}

/// Add-risk dialog form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewRiskForm {
    pub risk_name: String,
    pub risk_owner: String,
    pub severity: i32,
    pub justification: String,
    pub mitigation: String,
}

impl Default for NewRiskForm {
    fn default() -> Self {
        Self {
            risk_name: String::new(),
            risk_owner: String::new(),
            severity: 3,
            justification: String::new(),
            mitigation: String::new(),
        }
    }
}

/// `POST /risks` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRiskPayload {
    pub risk_name: String,
    pub risk_owner: String,
    pub severity: i32,
    pub justification: String,
    pub mitigation: String,
    pub project_id: String,
}

impl NewRiskForm {
    pub fn is_valid(&self) -> bool {
        !self.risk_name.trim().is_empty() && (1..=5).contains(&self.severity)
    }

    pub fn to_payload(&self, project_id: &str) -> NewRiskPayload {
        NewRiskPayload {
            risk_name: self.risk_name.trim().to_owned(),
            risk_owner: self.risk_owner.trim().to_owned(),
            severity: self.severity,
            justification: self.justification.trim().to_owned(),
            mitigation: self.mitigation.trim().to_owned(),
            project_id: project_id.to_owned(),
        }
    }
}
