//! Wire DTOs for the REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads field-for-field (camelCase
//! on the wire) so serde round-trips stay lossless. The frontend only ever
//! holds transient projections of these resources.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// High-level system type used by the risk and control listing endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SystemType {
    Ai,
    Cybersecurity,
}

impl SystemType {
    /// Query-parameter value expected by the backend.
    pub fn as_query(self) -> &'static str {
        match self {
            Self::Ai => "AI",
            Self::Cybersecurity => "Cybersecurity",
        }
    }

    /// Display label used in page headings and export titles.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ai => "AI",
            Self::Cybersecurity => "Cybersecurity",
        }
    }
}

/// Lifecycle status of a risk assessment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskStatus {
    #[default]
    Pending,
    Completed,
    Rejected,
}

impl RiskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Rejected => "Rejected",
        }
    }

    /// All statuses, in the order the filter dropdown shows them.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Completed, Self::Rejected];
}

/// Implementation status of a compliance control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlStatus {
    Implemented,
    #[serde(rename = "In Progress")]
    InProgress,
    #[default]
    #[serde(rename = "Not Implemented")]
    NotImplemented,
}

impl ControlStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Implemented => "Implemented",
            Self::InProgress => "In Progress",
            Self::NotImplemented => "Not Implemented",
        }
    }

    pub const ALL: [Self; 3] = [Self::Implemented, Self::InProgress, Self::NotImplemented];
}

/// Who created a resource, as embedded by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatedBy {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// A risk assessment row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    /// Backend document id, used for detail routes and local patching.
    #[serde(rename = "_id", default)]
    pub id: String,
    pub risk_assessment_id: String,
    #[serde(default)]
    pub project_id: Option<String>,
    pub risk_name: String,
    #[serde(default)]
    pub risk_owner: Option<String>,
    /// 1-5 rating; 5=Critical, 4=High, 3=Medium, 2=Low, else Very Low.
    pub severity: i32,
    #[serde(default)]
    pub status: RiskStatus,
    #[serde(default)]
    pub residual_score: f64,
    #[serde(default)]
    pub target_score: f64,
    #[serde(default)]
    pub justification: Option<String>,
    #[serde(default)]
    pub mitigation: Option<String>,
    #[serde(default)]
    pub created_by: Option<CreatedBy>,
    /// ISO 8601 creation timestamp, if the backend supplied one.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A compliance control row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Control {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub code: String,
    #[serde(default)]
    pub section: String,
    pub control: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub related_risks: String,
    #[serde(default)]
    pub status: ControlStatus,
    #[serde(default)]
    pub tickets: String,
    #[serde(default)]
    pub project_id: Option<String>,
}

/// Pagination envelope mirrored from the backend on every list fetch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u32,
    pub pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, limit: 10, total: 0, pages: 0 }
    }
}

/// `/risks/type` response body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskPage {
    #[serde(default)]
    pub risks: Vec<Risk>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// `/controls/type` response body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlPage {
    #[serde(default)]
    pub controls: Vec<Control>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Aggregate risk statistics from `/risks/stats/summary`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskStats {
    #[serde(default)]
    pub summary: RiskStatsSummary,
    /// Counts keyed by severity label (Critical/High/Medium/Low).
    #[serde(default)]
    pub risk_levels: BTreeMap<String, u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskStatsSummary {
    #[serde(default)]
    pub total_assessments: u32,
    #[serde(default)]
    pub completed_assessments: u32,
    #[serde(default)]
    pub pending_assessments: u32,
}

/// One of the four system assessment template categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateType {
    #[serde(rename = "AI System")]
    AiSystem,
    #[serde(rename = "Cybersecurity Management System")]
    Cybersecurity,
    #[serde(rename = "Third-party AI System")]
    ThirdPartyAi,
    #[serde(rename = "Third-party Cybersecurity System")]
    ThirdPartyCyber,
}

impl TemplateType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AiSystem => "AI System",
            Self::Cybersecurity => "Cybersecurity Management System",
            Self::ThirdPartyAi => "Third-party AI System",
            Self::ThirdPartyCyber => "Third-party Cybersecurity System",
        }
    }

    pub const ALL: [Self; 4] = [
        Self::AiSystem,
        Self::Cybersecurity,
        Self::ThirdPartyAi,
        Self::ThirdPartyCyber,
    ];
}

/// Declared answer shape for a template question.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    #[default]
    Text,
    Numeric,
    Mcq,
    Msq,
    Boolean,
}

impl ResponseType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text Answer",
            Self::Numeric => "Numeric",
            Self::Mcq => "Multiple Choice (Single Answer - MCQ)",
            Self::Msq => "Multiple Select (MSQ)",
            Self::Boolean => "Boolean (Yes/No)",
        }
    }

    /// Whether the builder UI needs an option list for this type.
    pub fn has_options(self) -> bool {
        matches!(self, Self::Mcq | Self::Msq)
    }

    pub const ALL: [Self; 5] = [Self::Text, Self::Numeric, Self::Mcq, Self::Msq, Self::Boolean];
}

/// One question inside a template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateQuestion {
    pub id: String,
    pub question: String,
    #[serde(default)]
    pub response_type: ResponseType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Vec<String>,
}

/// A named, ordered set of assessment questions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub template_type: TemplateType,
    #[serde(default)]
    pub questions: Vec<TemplateQuestion>,
}

/// An answer to a single template question.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    One(String),
    Many(Vec<String>),
}

impl Answer {
    /// Whether the answer counts as empty for required-field validation.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::One(value) => value.trim().is_empty(),
            Self::Many(values) => values.is_empty(),
        }
    }
}

/// Identity attached to a submitted template response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespondentInfo {
    pub name: String,
    pub email: String,
}

/// A submitted response to a template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateResponse {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub template_id: String,
    #[serde(default)]
    pub respondent_info: RespondentInfo,
    /// Map from question id to answer; shape depends on the response type.
    #[serde(default)]
    pub responses: BTreeMap<String, Answer>,
    #[serde(default)]
    pub submitted_at: Option<String>,
}

/// Attachment metadata carried alongside a comment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentInfo {
    pub original_name: String,
    pub size: u64,
}

/// A project comment with at most one PDF attachment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub comment_id: String,
    pub text: String,
    /// Stored attachment URL, if any.
    #[serde(default)]
    pub attachment: Option<String>,
    #[serde(default)]
    pub attachment_info: Option<AttachmentInfo>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A third-party vendor record linked to a project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThirdParty {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub project_id: String,
    pub name: String,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub services: Option<String>,
    #[serde(default)]
    pub risk_rating: Option<i32>,
}

/// Governance score snapshot for one project.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceScores {
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub overall_score: f64,
    /// Per-dimension scores keyed by dimension name.
    #[serde(default)]
    pub dimensions: BTreeMap<String, f64>,
    #[serde(default)]
    pub calculated_at: Option<String>,
}

/// Platform-wide governance statistics for the dashboard home.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceStatistics {
    #[serde(default)]
    pub total_projects: u32,
    #[serde(default)]
    pub average_score: f64,
    #[serde(default)]
    pub assessed_projects: u32,
}

/// A data element cataloged for a project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataElement {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub project_id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sensitivity: Option<String>,
}

/// The authenticated user profile cached under the `user` storage key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserProfile {
    /// Whether the user may edit questionnaire templates inline.
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}

/// `POST /auth/login` response body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Payload for the questionnaire processing endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireSubmission {
    /// Flat answer map keyed by question id (general + dynamic).
    pub questionnaire_responses: BTreeMap<String, String>,
    pub project_id: String,
    pub use_case_type: String,
}
