//! Client-side table state for the control assessment pages.
//!
//! DESIGN
//! ======
//! Controls are fetched once per system type with a wide window and then
//! filtered and paginated locally at 15 rows per page. The unique project
//! dropdown is derived from the fetched set rather than a separate endpoint.
//!
//! Status changes are optimistic with an explicit rollback: the previous
//! status is captured before the local patch, and a failed PATCH restores
//! it so the table never shows a state the server rejected.

#[cfg(test)]
#[path = "controls_test.rs"]
mod controls_test;

use crate::net::http::QueryParams;
use crate::net::types::{Control, ControlStatus};

/// Local page size for the control table.
pub const PAGE_SIZE: usize = 15;
/// Fetch window; the full control set for a system type fits well inside.
pub const FETCH_LIMIT: u32 = 1000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlTable {
    controls: Vec<Control>,
    status_filter: String,
    project_filter: String,
    page: usize,
}

impl Default for ControlTable {
    fn default() -> Self {
        Self {
            controls: Vec::new(),
            status_filter: "all".to_owned(),
            project_filter: "all".to_owned(),
            page: 1,
        }
    }
}

impl ControlTable {
    /// Query string for the single wide fetch.
    pub fn fetch_query() -> String {
        let mut params = QueryParams::new();
        params.push("page", 1).push("limit", FETCH_LIMIT);
        params.to_query_string()
    }

    /// Replace the backing set after a fetch, keeping filters but resetting
    /// the page.
    pub fn load(&mut self, controls: Vec<Control>) {
        self.controls = controls;
        self.page = 1;
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn status_filter(&self) -> &str {
        &self.status_filter
    }

    pub fn project_filter(&self) -> &str {
        &self.project_filter
    }

    pub fn set_status_filter(&mut self, status: &str) {
        self.status_filter = status.to_owned();
        self.page = 1;
    }

    pub fn set_project_filter(&mut self, project: &str) {
        self.project_filter = project.to_owned();
        self.page = 1;
    }

    /// Unique project ids present in the fetched set, sorted.
    pub fn unique_projects(&self) -> Vec<String> {
        let mut projects: Vec<String> = self
            .controls
            .iter()
            .filter_map(|c| c.project_id.clone())
            .filter(|p| !p.trim().is_empty())
            .collect();
        projects.sort();
        projects.dedup();
        projects
    }

    /// The filtered set, before pagination.
    pub fn filtered(&self) -> Vec<&Control> {
        self.controls
            .iter()
            .filter(|c| {
                (self.status_filter == "all" || c.status.as_str() == self.status_filter)
                    && (self.project_filter == "all"
                        || c.project_id.as_deref() == Some(self.project_filter.as_str()))
            })
            .collect()
    }

    /// Number of local pages for the current filters, at least 1.
    pub fn page_count(&self) -> usize {
        self.filtered().len().div_ceil(PAGE_SIZE).max(1)
    }

    /// Set the page, clamped into the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.page_count());
    }

    /// The rows visible on the current page.
    pub fn visible(&self) -> Vec<Control> {
        self.filtered()
            .into_iter()
            .skip((self.page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .cloned()
            .collect()
    }

    /// Optimistically apply a status change, returning a command that can
    /// roll the row back if the server rejects it.
    pub fn begin_status_change(
        &mut self,
        control_id: &str,
        status: ControlStatus,
    ) -> Option<StatusCommand> {
        let control = self.controls.iter_mut().find(|c| c.id == control_id)?;
        if control.status == status {
            return None;
        }
        let command = StatusCommand {
            control_id: control_id.to_owned(),
            previous: control.status,
            requested: status,
        };
        control.status = status;
        Some(command)
    }

    /// Undo an optimistic change after a failed PATCH.
    pub fn rollback(&mut self, command: &StatusCommand) {
        if let Some(control) = self.controls.iter_mut().find(|c| c.id == command.control_id) {
            control.status = command.previous;
        }
    }
}

/// An in-flight optimistic status change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusCommand {
    pub control_id: String,
    pub previous: ControlStatus,
    pub requested: ControlStatus,
}
