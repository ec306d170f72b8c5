//! Local table state for the inventory page.
//!
//! DESIGN
//! ======
//! The inventory never talks to the server: records live in page state,
//! edits happen through dialogs, and the download button assembles the CSV
//! client-side from whatever the current filters show.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use crate::util::csv;

/// Kind of inventoried asset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecordType {
    #[default]
    Vendor,
    System,
}

impl RecordType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vendor => "Vendor",
            Self::System => "System",
        }
    }

    pub const ALL: [Self; 2] = [Self::Vendor, Self::System];
}

/// Reported AI usage level, doubling as the row's status badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AiUsage {
    High,
    Medium,
    #[default]
    Low,
    Incomplete,
    Unavailable,
}

impl AiUsage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Incomplete => "Incomplete",
            Self::Unavailable => "Unavailable",
        }
    }

    /// Lowercase key used by the status filter dropdown.
    pub fn status_key(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Incomplete => "incomplete",
            Self::Unavailable => "unavailable",
        }
    }

    pub const ALL: [Self; 5] =
        [Self::High, Self::Medium, Self::Low, Self::Incomplete, Self::Unavailable];
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InventoryRecord {
    pub id: u32,
    pub name: String,
    pub record_type: RecordType,
    pub contact: String,
    pub last_updated: String,
    pub ai_usage: AiUsage,
    pub data_processing: String,
}

/// CSV column order for the download button.
pub const CSV_HEADER: [&str; 6] =
    ["Name", "Type", "Contact", "Last Updated", "AI Usage", "Data Processing"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InventoryTable {
    records: Vec<InventoryRecord>,
    pub search: String,
    /// `all`, a type (`vendor`/`system`), or a usage status key.
    pub filter: String,
    selected: Vec<u32>,
}

impl InventoryTable {
    pub fn with_records(records: Vec<InventoryRecord>) -> Self {
        Self { records, filter: "all".to_owned(), ..Default::default() }
    }

    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    pub fn selected(&self) -> &[u32] {
        &self.selected
    }

    /// Rows matching the current search text and filter.
    pub fn filtered(&self) -> Vec<&InventoryRecord> {
        let needle = self.search.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                let matches_search = needle.is_empty()
                    || r.name.to_lowercase().contains(&needle)
                    || r.record_type.as_str().to_lowercase().contains(&needle)
                    || r.contact.to_lowercase().contains(&needle);
                let matches_filter = self.filter == "all"
                    || r.record_type.as_str().to_lowercase() == self.filter.to_lowercase()
                    || r.ai_usage.status_key() == self.filter;
                matches_search && matches_filter
            })
            .collect()
    }

    /// Append a record under the next free id and return that id.
    pub fn add(&mut self, mut record: InventoryRecord) -> u32 {
        let id = self.records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        record.id = id;
        self.records.push(record);
        id
    }

    pub fn update(&mut self, record: InventoryRecord) -> bool {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => {
                *existing = record;
                true
            }
            None => false,
        }
    }

    pub fn toggle_selected(&mut self, id: u32, selected: bool) {
        if selected {
            if !self.selected.contains(&id) {
                self.selected.push(id);
            }
        } else {
            self.selected.retain(|s| *s != id);
        }
    }

    /// Select or clear every row the current filters show.
    pub fn select_all_visible(&mut self, selected: bool) {
        self.selected = if selected {
            self.filtered().iter().map(|r| r.id).collect()
        } else {
            Vec::new()
        };
    }

    /// Remove the selected rows; returns how many were deleted. Deleting
    /// with nothing selected is a no-op the page reports as a warning.
    pub fn delete_selected(&mut self) -> usize {
        let before = self.records.len();
        let doomed = std::mem::take(&mut self.selected);
        self.records.retain(|r| !doomed.contains(&r.id));
        before - self.records.len()
    }

    /// CSV of the currently filtered rows.
    pub fn to_csv(&self) -> String {
        let rows: Vec<Vec<String>> = self
            .filtered()
            .iter()
            .map(|r| {
                vec![
                    r.name.clone(),
                    r.record_type.as_str().to_owned(),
                    r.contact.clone(),
                    r.last_updated.clone(),
                    r.ai_usage.as_str().to_owned(),
                    r.data_processing.clone(),
                ]
            })
            .collect();
        csv::to_csv(&CSV_HEADER, &rows)
    }
}
