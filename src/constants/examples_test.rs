use super::*;
use crate::constants::templates::sample_templates;

#[test]
fn every_demo_key_resolves() {
    for key in EXAMPLE_KEYS {
        let example = example_data(key).unwrap_or_else(|| panic!("missing fixture {key}"));
        assert_eq!(example.sub_system_type.as_key(), key_to_sub_type(key));
    }
    assert!(example_data("unknown").is_none());
}

fn key_to_sub_type(key: &str) -> &str {
    match key {
        "internal-ai" => "ai-system",
        "internal-cyber" => "cybersecurity",
        other => other,
    }
}

#[test]
fn fixtures_answer_every_general_question() {
    for key in EXAMPLE_KEYS {
        let example = example_data(key).unwrap();
        let ids: Vec<&str> = example.general.iter().map(|(id, _)| *id).collect();
        for question in crate::constants::questions::GENERAL_QUESTIONS {
            assert!(ids.contains(&question.id), "{key} missing {}", question.id);
        }
    }
}

#[test]
fn fixture_answer_counts_match_their_templates() {
    let templates = sample_templates();
    for key in EXAMPLE_KEYS {
        let example = example_data(key).unwrap();
        let template = templates
            .iter()
            .find(|t| t.template_type == example.sub_system_type.template_type())
            .unwrap();
        assert_eq!(example.answers.len(), template.questions.len(), "{key}");
    }
}

#[test]
fn internal_ai_fixture_names_the_demo_project() {
    let example = example_data("internal-ai").unwrap();
    let project_name = example
        .general
        .iter()
        .find(|(id, _)| *id == "projectName")
        .map(|(_, value)| *value)
        .unwrap();
    assert_eq!(project_name, "Factory Maintenance Predictor");
    assert_eq!(example.sub_system_type.as_key(), "ai-system");
}
