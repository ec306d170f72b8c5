//! The fixed general question set for the governance questionnaire.
//!
//! DESIGN
//! ======
//! Seven general questions are rendered for every use case. Answering the
//! `projectType` radio reveals a dependent sub-question whose options pick
//! one of the four system types; that choice selects which assessment
//! template supplies the dynamic second question set.

#[cfg(test)]
#[path = "questions_test.rs"]
mod questions_test;

use crate::net::types::TemplateType;

/// Input widget for a general question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeneralInput {
    Text,
    Textarea,
    Radio,
}

/// A fixed general question definition.
#[derive(Clone, Copy, Debug)]
pub struct GeneralQuestion {
    pub id: &'static str,
    pub label: &'static str,
    pub input: GeneralInput,
    pub required: bool,
    pub placeholder: &'static str,
    /// `(value, label)` pairs for radio questions.
    pub options: &'static [(&'static str, &'static str)],
}

/// Answer values for the `projectType` radio.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectType {
    Internal,
    ThirdParty,
}

impl ProjectType {
    pub fn as_key(self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::ThirdParty => "thirdparty",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "internal" => Some(Self::Internal),
            "thirdparty" => Some(Self::ThirdParty),
            _ => None,
        }
    }
}

/// Answer values for the dependent system-type sub-question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubSystemType {
    AiSystem,
    Cybersecurity,
    ThirdPartyAi,
    ThirdPartyCyber,
}

impl SubSystemType {
    pub fn as_key(self) -> &'static str {
        match self {
            Self::AiSystem => "ai-system",
            Self::Cybersecurity => "cybersecurity",
            Self::ThirdPartyAi => "thirdparty-ai",
            Self::ThirdPartyCyber => "thirdparty-cyber",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ai-system" => Some(Self::AiSystem),
            "cybersecurity" => Some(Self::Cybersecurity),
            "thirdparty-ai" => Some(Self::ThirdPartyAi),
            "thirdparty-cyber" => Some(Self::ThirdPartyCyber),
            _ => None,
        }
    }

    /// Fixed map from system type to the template category that supplies
    /// the dynamic question set.
    pub fn template_type(self) -> TemplateType {
        match self {
            Self::AiSystem => TemplateType::AiSystem,
            Self::Cybersecurity => TemplateType::Cybersecurity,
            Self::ThirdPartyAi => TemplateType::ThirdPartyAi,
            Self::ThirdPartyCyber => TemplateType::ThirdPartyCyber,
        }
    }

    /// Which project type this system type belongs under.
    pub fn project_type(self) -> ProjectType {
        match self {
            Self::AiSystem | Self::Cybersecurity => ProjectType::Internal,
            Self::ThirdPartyAi | Self::ThirdPartyCyber => ProjectType::ThirdParty,
        }
    }
}

/// Answer-map key under which the sub-selection is recorded.
pub const SUB_SYSTEM_TYPE_KEY: &str = "subSystemType";

/// Label for the dependent sub-question.
pub const SUB_QUESTION_LABEL: &str = "8. Please select the system type:";

/// `(value, label)` options for the sub-question given the project type.
pub fn sub_question_options(project_type: ProjectType) -> &'static [(&'static str, &'static str)] {
    match project_type {
        ProjectType::Internal => &[
            ("ai-system", "AI-System"),
            ("cybersecurity", "Cybersecurity Management system"),
        ],
        ProjectType::ThirdParty => &[
            ("thirdparty-ai", "Third-party AI-System"),
            ("thirdparty-cyber", "Third-party Cybersecurity"),
        ],
    }
}

/// The seven fixed general questions, in render order.
pub const GENERAL_QUESTIONS: &[GeneralQuestion] = &[
    GeneralQuestion {
        id: "requestOwner",
        label: "1. Please enter your name or the name of the person for whom you are submitting this request and the country in which the request owner is located?",
        input: GeneralInput::Text,
        required: true,
        placeholder: "Name, country...",
        options: &[],
    },
    GeneralQuestion {
        id: "projectType",
        label: "2. Is this project internal to our organization or does it involve any third parties?",
        input: GeneralInput::Radio,
        required: true,
        placeholder: "",
        options: &[
            ("internal", "Developing a product in-house"),
            ("thirdparty", "Adopting/integrating third party AI system"),
        ],
    },
    GeneralQuestion {
        id: "projectName",
        label: "3. What is the name of your project?",
        input: GeneralInput::Text,
        required: true,
        placeholder: "Enter project name...",
        options: &[],
    },
    GeneralQuestion {
        id: "region",
        label: "4. From which regions do you need data for your use-case?",
        input: GeneralInput::Text,
        required: true,
        placeholder: "List regions...",
        options: &[],
    },
    GeneralQuestion {
        id: "purpose",
        label: "5. What is the intended purpose of your system?",
        input: GeneralInput::Textarea,
        required: true,
        placeholder: "Describe the purpose...",
        options: &[],
    },
    GeneralQuestion {
        id: "dateRange",
        label: "6. What is the date range for when you would like to start and complete the project?",
        input: GeneralInput::Text,
        required: true,
        placeholder: "e.g., September 2025 - December 31, 2025",
        options: &[],
    },
    GeneralQuestion {
        id: "delayFactors",
        label: "7. Are there any factors that might extend your project timeline?",
        input: GeneralInput::Textarea,
        required: false,
        placeholder: "Describe any potential delays...",
        options: &[],
    },
];
