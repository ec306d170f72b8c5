use super::*;

use crate::constants::templates::sample_templates;
use crate::net::types::TemplateType;

fn filled_general(state: &mut QuestionnaireState) {
    state.set_general("requestOwner", "Rohan Verma, India");
    state.set_general("projectType", "internal");
    state.set_general("projectName", "Factory Maintenance Predictor");
    state.set_general("region", "India");
    state.set_general("purpose", "Predictive maintenance");
    state.set_general("dateRange", "October 2025 - March 2026");
}

#[test]
fn fresh_state_is_invalid_but_unflagged() {
    let state = QuestionnaireState::default();
    assert!(!state.is_valid());
    assert!(!state.submit_attempted());
    assert!(!state.flag_missing(false, true));
}

#[test]
fn delay_factors_is_the_only_optional_general_question() {
    let mut state = QuestionnaireState::default();
    filled_general(&mut state);
    state.select_sub_system(SubSystemType::AiSystem, &sample_templates());
    // Answer every required dynamic question, leave delayFactors blank.
    let ids: Vec<String> = state
        .template()
        .unwrap()
        .questions
        .iter()
        .filter(|q| q.required)
        .map(|q| q.id.clone())
        .collect();
    for id in ids {
        state.set_dynamic(&id, "answered");
    }
    assert!(state.is_valid());
}

#[test]
fn selecting_a_system_type_installs_the_matching_template() {
    let mut state = QuestionnaireState::default();
    state.select_sub_system(SubSystemType::ThirdPartyCyber, &sample_templates());
    assert_eq!(
        state.template().unwrap().template_type,
        TemplateType::ThirdPartyCyber
    );
}

#[test]
fn changing_project_type_clears_sub_selection_and_dynamic_answers() {
    let mut state = QuestionnaireState::default();
    state.set_general("projectType", "internal");
    state.select_sub_system(SubSystemType::AiSystem, &sample_templates());
    state.set_dynamic("1", "answered");

    state.set_general("projectType", "thirdparty");
    assert!(state.sub_selection().is_none());
    assert!(state.template().is_none());
    assert_eq!(state.dynamic_answer("1"), "");
}

#[test]
fn reasserting_the_same_project_type_keeps_answers() {
    let mut state = QuestionnaireState::default();
    state.set_general("projectType", "internal");
    state.select_sub_system(SubSystemType::AiSystem, &sample_templates());
    state.set_dynamic("1", "answered");

    state.set_general("projectType", "internal");
    assert_eq!(state.sub_selection(), Some(SubSystemType::AiSystem));
    assert_eq!(state.dynamic_answer("1"), "answered");
}

#[test]
fn answered_project_type_requires_a_sub_selection() {
    let mut state = QuestionnaireState::default();
    filled_general(&mut state);
    let missing = state.missing_required();
    assert!(missing.contains(&crate::constants::questions::SUB_QUESTION_LABEL.to_owned()));
}

#[test]
fn failed_submit_sets_the_attempted_flag_and_returns_nothing() {
    let mut state = QuestionnaireState::default();
    assert!(state.try_submit().is_none());
    assert!(state.submit_attempted());
    assert!(state.flag_missing(false, true));
    assert!(!state.flag_missing(true, true));
    assert!(!state.flag_missing(false, false));
}

#[test]
fn valid_submit_builds_the_flat_payload() {
    let mut state = QuestionnaireState::default();
    assert!(state.load_example("internal-ai", &sample_templates()));
    let submission = state.try_submit().expect("example data must validate");

    assert_eq!(submission.project_id, crate::constants::DEFAULT_PROJECT_ID);
    assert_eq!(submission.use_case_type, "AI System");
    assert_eq!(
        submission.questionnaire_responses.get("subSystemType").map(String::as_str),
        Some("ai-system")
    );
    assert_eq!(
        submission.questionnaire_responses.get("projectName").map(String::as_str),
        Some("Factory Maintenance Predictor")
    );
    // Dynamic answers ride in the same flat map, keyed by question id.
    assert_eq!(
        submission.questionnaire_responses.get("1").map(String::as_str),
        Some("Proprietary LSTM-based model developed internally.")
    );
}

#[test]
fn load_example_aligns_answers_with_template_question_ids() {
    let mut state = QuestionnaireState::default();
    state.load_example("thirdparty-cyber", &sample_templates());
    let template = state.template().unwrap();
    assert_eq!(template.template_type, TemplateType::ThirdPartyCyber);
    let last_id = &template.questions.last().unwrap().id;
    assert!(!state.dynamic_answer(last_id).is_empty());
}

#[test]
fn upsert_replaces_a_question_in_place_and_keeps_its_answer() {
    let mut state = QuestionnaireState::default();
    state.select_sub_system(SubSystemType::AiSystem, &sample_templates());
    state.set_dynamic("1", "answered");
    let mut edited = state.template().unwrap().questions[0].clone();
    edited.question = "Reworded first question".to_owned();

    assert!(state.upsert_question(edited));
    let first = &state.template().unwrap().questions[0];
    assert_eq!(first.question, "Reworded first question");
    assert_eq!(state.dynamic_answer("1"), "answered");
}

#[test]
fn upsert_appends_when_the_id_is_new() {
    let mut state = QuestionnaireState::default();
    state.select_sub_system(SubSystemType::AiSystem, &sample_templates());
    let before = state.template().unwrap().questions.len();

    let added = crate::net::types::TemplateQuestion {
        id: "b1946ac9-4931-4a9a-8e22-51e054ae2fc3".to_owned(),
        question: "Who signs off on retraining?".to_owned(),
        response_type: crate::net::types::ResponseType::Text,
        required: true,
        options: Vec::new(),
    };
    assert!(state.upsert_question(added.clone()));
    let questions = &state.template().unwrap().questions;
    assert_eq!(questions.len(), before + 1);
    assert_eq!(questions.last().unwrap(), &added);
}

#[test]
fn upsert_without_an_installed_template_is_rejected() {
    let mut state = QuestionnaireState::default();
    let question = crate::net::types::TemplateQuestion {
        id: "1".to_owned(),
        question: "Orphan".to_owned(),
        response_type: crate::net::types::ResponseType::Text,
        required: false,
        options: Vec::new(),
    };
    assert!(!state.upsert_question(question));
    assert!(state.template().is_none());
}

#[test]
fn unknown_example_key_leaves_state_untouched() {
    let mut state = QuestionnaireState::default();
    state.set_general("projectName", "Keep me");
    assert!(!state.load_example("nope", &sample_templates()));
    assert_eq!(state.general_answer("projectName"), "Keep me");
}
