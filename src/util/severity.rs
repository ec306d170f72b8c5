//! Severity-to-label mapping shared by badges, charts, and exports.

#[cfg(test)]
#[path = "severity_test.rs"]
mod severity_test;

/// Severity bucket derived from the 1-5 rating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SeverityLevel {
    VeryLow,
    Low,
    Medium,
    High,
    Critical,
}

impl SeverityLevel {
    /// Bucket a raw severity. Values are rounded first; anything below 2
    /// (including negatives) is Very Low.
    pub fn from_severity(severity: i32) -> Self {
        match severity {
            s if s >= 5 => Self::Critical,
            4 => Self::High,
            3 => Self::Medium,
            2 => Self::Low,
            _ => Self::VeryLow,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::VeryLow => "Very Low",
        }
    }

    /// Chart/badge color for this bucket.
    pub fn color(self) -> &'static str {
        match self {
            Self::Critical => "#ef4444",
            Self::High => "#f97316",
            Self::Medium => "#eab308",
            Self::Low => "#22c55e",
            Self::VeryLow => "#94a3b8",
        }
    }
}

/// Display label for a raw severity value.
pub fn severity_text(severity: i32) -> &'static str {
    SeverityLevel::from_severity(severity).label()
}

/// Badge text combining label and raw value, e.g. `"Medium (3)"`.
pub fn severity_badge_text(severity: i32) -> String {
    format!("{} ({severity})", severity_text(severity))
}
