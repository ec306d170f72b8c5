//! Draft state for the template builder dialog.
//!
//! The builder edits a local draft and only converts it back to a wire
//! [`Template`] once validation passes; an open dialog can never push a
//! half-formed template at the server.

#[cfg(test)]
#[path = "templates_test.rs"]
mod templates_test;

use crate::net::types::{ResponseType, Template, TemplateQuestion, TemplateType};

/// One question row inside the builder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionDraft {
    pub id: String,
    pub question: String,
    pub response_type: ResponseType,
    pub required: bool,
    pub options: Vec<String>,
}

impl QuestionDraft {
    fn new(id: String) -> Self {
        Self {
            id,
            question: String::new(),
            response_type: ResponseType::Text,
            required: true,
            options: Vec::new(),
        }
    }

    /// Seed a single-question editor from an existing question.
    pub fn from_question(question: &TemplateQuestion) -> Self {
        Self {
            id: question.id.clone(),
            question: question.question.clone(),
            response_type: question.response_type,
            required: question.required,
            options: question.options.clone(),
        }
    }

    /// Whether this row would pass template validation on its own: text
    /// present, and at least two non-blank options for option types.
    pub fn is_complete(&self) -> bool {
        if self.question.trim().is_empty() {
            return false;
        }
        !self.response_type.has_options()
            || self.options.iter().filter(|o| !o.trim().is_empty()).count() >= 2
    }

    /// Convert to the wire shape. Options are only kept for types that use
    /// them, and blank options are dropped.
    pub fn to_question(&self) -> TemplateQuestion {
        TemplateQuestion {
            id: self.id.clone(),
            question: self.question.trim().to_owned(),
            response_type: self.response_type,
            required: self.required,
            options: if self.response_type.has_options() {
                self.options
                    .iter()
                    .map(|o| o.trim().to_owned())
                    .filter(|o| !o.is_empty())
                    .collect()
            } else {
                Vec::new()
            },
        }
    }
}

/// A template being created or edited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateDraft {
    /// Backend id when editing; empty for a new template.
    pub id: String,
    pub name: String,
    pub description: String,
    pub template_type: TemplateType,
    pub questions: Vec<QuestionDraft>,
}

impl Default for TemplateDraft {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            description: String::new(),
            template_type: TemplateType::AiSystem,
            questions: Vec::new(),
        }
    }
}

impl TemplateDraft {
    /// Seed the dialog from an existing template.
    pub fn from_template(template: &Template) -> Self {
        Self {
            id: template.id.clone(),
            name: template.name.clone(),
            description: template.description.clone(),
            template_type: template.template_type,
            questions: template
                .questions
                .iter()
                .map(|q| QuestionDraft {
                    id: q.id.clone(),
                    question: q.question.clone(),
                    response_type: q.response_type,
                    required: q.required,
                    options: q.options.clone(),
                })
                .collect(),
        }
    }

    /// Append a blank question with the next free numeric id.
    pub fn add_question(&mut self) -> &mut QuestionDraft {
        let id = self.next_question_id();
        self.questions.push(QuestionDraft::new(id));
        let last = self.questions.len() - 1;
        &mut self.questions[last]
    }

    /// Smallest numeric id above every existing numeric id. Non-numeric ids
    /// from hand-edited templates are simply skipped.
    fn next_question_id(&self) -> String {
        let max = self
            .questions
            .iter()
            .filter_map(|q| q.id.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }

    pub fn remove_question(&mut self, id: &str) {
        self.questions.retain(|q| q.id != id);
    }

    pub fn move_question_up(&mut self, id: &str) {
        if let Some(index) = self.questions.iter().position(|q| q.id == id)
            && index > 0
        {
            self.questions.swap(index, index - 1);
        }
    }

    pub fn move_question_down(&mut self, id: &str) {
        if let Some(index) = self.questions.iter().position(|q| q.id == id)
            && index + 1 < self.questions.len()
        {
            self.questions.swap(index, index + 1);
        }
    }

    /// All validation problems, in display order. Empty means submittable.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.name.trim().is_empty() {
            problems.push("Template name is required.".to_owned());
        }
        if self.questions.is_empty() {
            problems.push("Add at least one question.".to_owned());
        }
        for (index, question) in self.questions.iter().enumerate() {
            let n = index + 1;
            if question.question.trim().is_empty() {
                problems.push(format!("Question {n} needs text."));
            }
            if question.response_type.has_options()
                && question.options.iter().filter(|o| !o.trim().is_empty()).count() < 2
            {
                problems.push(format!("Question {n} needs at least two options."));
            }
        }
        problems
    }

    pub fn is_valid(&self) -> bool {
        self.problems().is_empty()
    }

    /// Convert back to the wire shape.
    pub fn to_template(&self) -> Template {
        Template {
            id: self.id.clone(),
            name: self.name.trim().to_owned(),
            description: self.description.trim().to_owned(),
            template_type: self.template_type,
            questions: self.questions.iter().map(QuestionDraft::to_question).collect(),
        }
    }
}
