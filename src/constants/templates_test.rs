use super::*;

#[test]
fn one_sample_template_exists_per_system_type() {
    let templates = sample_templates();
    assert_eq!(templates.len(), 4);
    for template_type in TemplateType::ALL {
        assert_eq!(
            templates.iter().filter(|t| t.template_type == template_type).count(),
            1,
            "{}",
            template_type.as_str()
        );
    }
}

#[test]
fn sample_question_ids_are_sequential_within_each_template() {
    for template in sample_templates() {
        for (index, question) in template.questions.iter().enumerate() {
            assert_eq!(question.id, format!("{}", index + 1), "{}", template.name);
        }
    }
}

#[test]
fn ai_template_has_the_seed_question_count() {
    let templates = sample_templates();
    let ai = templates.iter().find(|t| t.template_type == TemplateType::AiSystem).unwrap();
    assert_eq!(ai.questions.len(), 17);
    assert!(ai.questions[0].question.starts_with("Which AI model"));
    // Questions 4 and 5 are the only optional ones in the seed data.
    let optional: Vec<&str> =
        ai.questions.iter().filter(|q| !q.required).map(|q| q.id.as_str()).collect();
    assert_eq!(optional, ["4", "5"]);
}
