//! State machine behind the intake questionnaire.
//!
//! DESIGN
//! ======
//! Seven fixed general questions are always shown; answering `projectType`
//! reveals the system-type sub-question, and the sub-selection installs one
//! of the four assessment templates as the dynamic question set. Changing
//! the project type discards the sub-selection and every dynamic answer so
//! stale answers from another template can never leak into a submission.
//!
//! Validation is a gate, not live feedback: nothing is flagged until the
//! first submit attempt, after which every unanswered required question is
//! listed until it is filled.

#[cfg(test)]
#[path = "questionnaire_test.rs"]
mod questionnaire_test;

use std::collections::BTreeMap;

use crate::constants::DEFAULT_PROJECT_ID;
use crate::constants::examples::example_data;
use crate::constants::questions::{GENERAL_QUESTIONS, ProjectType, SubSystemType};
use crate::net::types::{QuestionnaireSubmission, Template, TemplateQuestion};

/// Submission lifecycle for the page footer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    /// Success; the page redirects to the dashboard after a short pause.
    Succeeded,
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuestionnaireState {
    /// General answers keyed by question id.
    general: BTreeMap<String, String>,
    sub_selection: Option<SubSystemType>,
    /// The installed template, once a system type is chosen.
    template: Option<Template>,
    /// Dynamic answers keyed by template question id.
    dynamic: BTreeMap<String, String>,
    submit_attempted: bool,
    pub phase: SubmitPhase,
}

impl QuestionnaireState {
    pub fn general_answer(&self, id: &str) -> &str {
        self.general.get(id).map_or("", String::as_str)
    }

    pub fn dynamic_answer(&self, id: &str) -> &str {
        self.dynamic.get(id).map_or("", String::as_str)
    }

    pub fn sub_selection(&self) -> Option<SubSystemType> {
        self.sub_selection
    }

    pub fn template(&self) -> Option<&Template> {
        self.template.as_ref()
    }

    /// The chosen project type, once the radio has a valid answer.
    pub fn project_type(&self) -> Option<ProjectType> {
        ProjectType::from_key(self.general_answer("projectType"))
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    /// Record a general answer. Switching `projectType` resets the dependent
    /// sub-question and all dynamic answers.
    pub fn set_general(&mut self, id: &str, value: &str) {
        if id == "projectType" && self.general_answer("projectType") != value {
            self.sub_selection = None;
            self.template = None;
            self.dynamic.clear();
        }
        self.general.insert(id.to_owned(), value.to_owned());
    }

    /// Record the system-type sub-selection and install its template from
    /// the catalog. Re-selecting the same type keeps existing answers.
    pub fn select_sub_system(&mut self, sub: SubSystemType, catalog: &[Template]) {
        if self.sub_selection == Some(sub) {
            return;
        }
        self.sub_selection = Some(sub);
        self.dynamic.clear();
        self.template = catalog
            .iter()
            .find(|t| t.template_type == sub.template_type())
            .cloned();
    }

    pub fn set_dynamic(&mut self, question_id: &str, value: &str) {
        self.dynamic.insert(question_id.to_owned(), value.to_owned());
    }

    /// Admin edit of the installed question set: replace the question with
    /// a matching id, or append when the id is new. Answers already entered
    /// under the id are kept. Returns false when no template is installed.
    pub fn upsert_question(&mut self, question: TemplateQuestion) -> bool {
        let Some(template) = &mut self.template else {
            return false;
        };
        match template.questions.iter_mut().find(|q| q.id == question.id) {
            Some(existing) => *existing = question,
            None => template.questions.push(question),
        }
        true
    }

    /// Fill the whole form from one of the canned example datasets.
    pub fn load_example(&mut self, key: &str, catalog: &[Template]) -> bool {
        let Some(example) = example_data(key) else {
            return false;
        };
        self.general.clear();
        self.dynamic.clear();
        self.sub_selection = None;
        self.template = None;
        self.submit_attempted = false;
        self.phase = SubmitPhase::Idle;
        for (id, value) in example.general {
            self.general.insert((*id).to_owned(), (*value).to_owned());
        }
        self.select_sub_system(example.sub_system_type, catalog);
        if let Some(template) = self.template.clone() {
            for (question, answer) in template.questions.iter().zip(example.answers) {
                self.dynamic.insert(question.id.clone(), (*answer).to_owned());
            }
        }
        true
    }

    /// Labels of every required question still missing an answer.
    pub fn missing_required(&self) -> Vec<String> {
        let mut missing = Vec::new();
        for question in GENERAL_QUESTIONS {
            if question.required && self.general_answer(question.id).trim().is_empty() {
                missing.push(question.label.to_owned());
            }
        }
        if self.project_type().is_some() && self.sub_selection.is_none() {
            missing.push(crate::constants::questions::SUB_QUESTION_LABEL.to_owned());
        }
        if let Some(template) = &self.template {
            for question in &template.questions {
                if question.required && self.dynamic_answer(&question.id).trim().is_empty() {
                    missing.push(question.question.clone());
                }
            }
        }
        missing
    }

    pub fn is_valid(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// Gate a submit attempt: returns the payload when valid, otherwise
    /// records the attempt so the page starts flagging missing answers.
    pub fn try_submit(&mut self) -> Option<QuestionnaireSubmission> {
        self.submit_attempted = true;
        if !self.is_valid() {
            return None;
        }
        let sub = self.sub_selection?;
        let mut responses = self.general.clone();
        responses.insert(
            crate::constants::questions::SUB_SYSTEM_TYPE_KEY.to_owned(),
            sub.as_key().to_owned(),
        );
        for (id, answer) in &self.dynamic {
            if !answer.trim().is_empty() {
                responses.insert(id.clone(), answer.clone());
            }
        }
        Some(QuestionnaireSubmission {
            questionnaire_responses: responses,
            project_id: DEFAULT_PROJECT_ID.to_owned(),
            use_case_type: sub.template_type().as_str().to_owned(),
        })
    }

    /// Whether this question should show the missing-answer highlight.
    pub fn flag_missing(&self, answered: bool, required: bool) -> bool {
        self.submit_attempted && required && !answered
    }
}
