use super::*;

#[test]
fn risk_deserializes_from_backend_shape() {
    let json = serde_json::json!({
        "_id": "64f0c2",
        "riskAssessmentId": "RA-102",
        "projectId": "proj-7",
        "riskName": "Model drift",
        "riskOwner": "QA",
        "severity": 4,
        "status": "Pending",
        "residualScore": 2.5,
        "targetScore": 1.0,
        "createdBy": { "name": "Ana" },
        "createdAt": "2025-08-01T10:00:00Z"
    });
    let risk: Risk = serde_json::from_value(json).unwrap();
    assert_eq!(risk.id, "64f0c2");
    assert_eq!(risk.risk_assessment_id, "RA-102");
    assert_eq!(risk.severity, 4);
    assert_eq!(risk.status, RiskStatus::Pending);
    assert_eq!(risk.created_by.unwrap().name.as_deref(), Some("Ana"));
}

#[test]
fn risk_tolerates_missing_optional_fields() {
    let json = serde_json::json!({
        "riskAssessmentId": "RA-1",
        "riskName": "Bare",
        "severity": 2
    });
    let risk: Risk = serde_json::from_value(json).unwrap();
    assert!(risk.project_id.is_none());
    assert_eq!(risk.residual_score, 0.0);
    assert_eq!(risk.status, RiskStatus::Pending);
}

#[test]
fn control_status_uses_spaced_wire_names() {
    let control: Control = serde_json::from_value(serde_json::json!({
        "code": "AI-01",
        "control": "Access review",
        "status": "In Progress"
    }))
    .unwrap();
    assert_eq!(control.status, ControlStatus::InProgress);
    let back = serde_json::to_value(&control).unwrap();
    assert_eq!(back["status"], "In Progress");
}

#[test]
fn template_type_round_trips_display_strings() {
    for template_type in TemplateType::ALL {
        let json = serde_json::to_value(template_type).unwrap();
        assert_eq!(json, template_type.as_str());
        let parsed: TemplateType = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, template_type);
    }
}

#[test]
fn answer_accepts_scalar_and_list_shapes() {
    let one: Answer = serde_json::from_value(serde_json::json!("Yes")).unwrap();
    assert_eq!(one, Answer::One("Yes".into()));
    let many: Answer = serde_json::from_value(serde_json::json!(["a", "b"])).unwrap();
    assert_eq!(many, Answer::Many(vec!["a".into(), "b".into()]));
    assert!(Answer::One("  ".into()).is_empty());
    assert!(Answer::Many(vec![]).is_empty());
    assert!(!Answer::One("x".into()).is_empty());
}

#[test]
fn questionnaire_submission_serializes_camel_case() {
    let mut responses = std::collections::BTreeMap::new();
    responses.insert("requestOwner".to_owned(), "QA, India".to_owned());
    let payload = QuestionnaireSubmission {
        questionnaire_responses: responses,
        project_id: "p1".to_owned(),
        use_case_type: "AI System".to_owned(),
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["projectId"], "p1");
    assert_eq!(json["useCaseType"], "AI System");
    assert_eq!(json["questionnaireResponses"]["requestOwner"], "QA, India");
}

#[test]
fn user_profile_admin_role_check() {
    let admin = UserProfile {
        id: String::new(),
        name: "A".into(),
        email: "a@example.com".into(),
        role: Some("admin".into()),
    };
    let viewer = UserProfile { role: Some("viewer".into()), ..admin.clone() };
    assert!(admin.is_admin());
    assert!(!viewer.is_admin());
}
