use super::*;

#[test]
fn status_endpoint_addresses_one_processing_session() {
    assert_eq!(status_endpoint("sess-42"), "/questionnaire/status/sess-42");
}

#[test]
fn submission_serializes_with_the_expected_top_level_keys() {
    let mut responses = std::collections::BTreeMap::new();
    responses.insert("projectName".to_owned(), "Factory Maintenance Predictor".to_owned());
    let submission = QuestionnaireSubmission {
        questionnaire_responses: responses,
        project_id: "p-1".to_owned(),
        use_case_type: "AI System".to_owned(),
    };
    let json = serde_json::to_value(&submission).unwrap();
    assert_eq!(json["projectId"], "p-1");
    assert_eq!(json["useCaseType"], "AI System");
    assert_eq!(
        json["questionnaireResponses"]["projectName"],
        "Factory Maintenance Predictor"
    );
}
