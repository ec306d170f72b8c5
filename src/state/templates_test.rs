use super::*;

use crate::constants::templates::sample_templates;

fn draft_with_one_question(text: &str) -> TemplateDraft {
    let mut draft = TemplateDraft { name: "Vendor review".to_owned(), ..Default::default() };
    draft.add_question().question = text.to_owned();
    draft
}

#[test]
fn new_questions_get_sequential_numeric_ids() {
    let mut draft = TemplateDraft::default();
    assert_eq!(draft.add_question().id, "1");
    assert_eq!(draft.add_question().id, "2");
    draft.remove_question("1");
    // Ids never reuse a freed slot below the current maximum.
    assert_eq!(draft.add_question().id, "3");
}

#[test]
fn blank_drafts_report_every_problem() {
    let draft = TemplateDraft::default();
    let problems = draft.problems();
    assert!(problems.iter().any(|p| p.contains("name")));
    assert!(problems.iter().any(|p| p.contains("at least one question")));
}

#[test]
fn mcq_questions_need_two_real_options() {
    let mut draft = draft_with_one_question("Pick one");
    draft.questions[0].response_type = ResponseType::Mcq;
    draft.questions[0].options = vec!["Yes".to_owned(), "  ".to_owned()];
    assert!(!draft.is_valid());
    draft.questions[0].options = vec!["Yes".to_owned(), "No".to_owned()];
    assert!(draft.is_valid());
}

#[test]
fn options_are_dropped_for_types_that_do_not_use_them() {
    let mut draft = draft_with_one_question("Describe it");
    draft.questions[0].options = vec!["stale".to_owned()];
    let template = draft.to_template();
    assert!(template.questions[0].options.is_empty());
}

#[test]
fn move_up_and_down_swap_neighbors_and_ignore_the_edges() {
    let mut draft = TemplateDraft::default();
    draft.add_question();
    draft.add_question();
    draft.add_question();
    draft.move_question_up("1");
    assert_eq!(draft.questions[0].id, "1");
    draft.move_question_down("1");
    assert_eq!(draft.questions[0].id, "2");
    assert_eq!(draft.questions[1].id, "1");
    draft.move_question_down("3");
    assert_eq!(draft.questions[2].id, "3");
}

#[test]
fn single_question_completeness_mirrors_template_validation() {
    let mut question = QuestionDraft { question: "Pick one".to_owned(), ..Default::default() };
    assert!(question.is_complete());

    question.response_type = ResponseType::Msq;
    question.options = vec!["Yes".to_owned(), "  ".to_owned()];
    assert!(!question.is_complete());
    question.options = vec!["Yes".to_owned(), "No".to_owned()];
    assert!(question.is_complete());

    question.question = "  ".to_owned();
    assert!(!question.is_complete());
}

#[test]
fn to_question_trims_text_and_filters_blank_options() {
    let draft = QuestionDraft {
        id: "q-7".to_owned(),
        question: "  Pick one  ".to_owned(),
        response_type: ResponseType::Mcq,
        required: true,
        options: vec!["Yes".to_owned(), " ".to_owned(), " No ".to_owned()],
    };
    let question = draft.to_question();
    assert_eq!(question.question, "Pick one");
    assert_eq!(question.options, vec!["Yes".to_owned(), "No".to_owned()]);
    assert_eq!(QuestionDraft::from_question(&question).id, "q-7");
}

#[test]
fn round_trip_from_an_existing_template_preserves_content() {
    let source = &sample_templates()[0];
    let draft = TemplateDraft::from_template(source);
    assert!(draft.is_valid());
    let rebuilt = draft.to_template();
    assert_eq!(rebuilt.name, source.name);
    assert_eq!(rebuilt.questions.len(), source.questions.len());
    assert_eq!(rebuilt.questions[0].id, source.questions[0].id);
}
