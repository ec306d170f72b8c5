use super::*;
use crate::net::types::TemplateType;

#[test]
fn general_questions_cover_the_fixed_ids_in_order() {
    let ids: Vec<&str> = GENERAL_QUESTIONS.iter().map(|q| q.id).collect();
    assert_eq!(
        ids,
        [
            "requestOwner",
            "projectType",
            "projectName",
            "region",
            "purpose",
            "dateRange",
            "delayFactors"
        ]
    );
}

#[test]
fn only_delay_factors_is_optional() {
    for question in GENERAL_QUESTIONS {
        assert_eq!(question.required, question.id != "delayFactors", "{}", question.id);
    }
}

#[test]
fn sub_question_options_depend_on_project_type() {
    let internal: Vec<&str> = sub_question_options(ProjectType::Internal)
        .iter()
        .map(|(value, _)| *value)
        .collect();
    let thirdparty: Vec<&str> = sub_question_options(ProjectType::ThirdParty)
        .iter()
        .map(|(value, _)| *value)
        .collect();
    assert_eq!(internal, ["ai-system", "cybersecurity"]);
    assert_eq!(thirdparty, ["thirdparty-ai", "thirdparty-cyber"]);
}

#[test]
fn sub_system_types_map_to_their_template_categories() {
    assert_eq!(SubSystemType::AiSystem.template_type(), TemplateType::AiSystem);
    assert_eq!(SubSystemType::Cybersecurity.template_type(), TemplateType::Cybersecurity);
    assert_eq!(SubSystemType::ThirdPartyAi.template_type(), TemplateType::ThirdPartyAi);
    assert_eq!(SubSystemType::ThirdPartyCyber.template_type(), TemplateType::ThirdPartyCyber);
}

#[test]
fn sub_system_type_keys_round_trip() {
    for key in ["ai-system", "cybersecurity", "thirdparty-ai", "thirdparty-cyber"] {
        assert_eq!(SubSystemType::from_key(key).unwrap().as_key(), key);
    }
    assert!(SubSystemType::from_key("frontend").is_none());
}

#[test]
fn sub_system_types_sort_under_the_right_project_type() {
    assert_eq!(SubSystemType::AiSystem.project_type(), ProjectType::Internal);
    assert_eq!(SubSystemType::ThirdPartyCyber.project_type(), ProjectType::ThirdParty);
}
