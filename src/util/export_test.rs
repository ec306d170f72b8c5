use super::*;

use crate::net::types::{ControlStatus, CreatedBy, RiskStatus};

fn sample_risk() -> Risk {
    Risk {
        id: "65aa".to_owned(),
        risk_assessment_id: "RA-001".to_owned(),
        project_id: Some("507f1f77bcf86cd799439011".to_owned()),
        risk_name: "Model drift".to_owned(),
        risk_owner: Some("Priya".to_owned()),
        severity: 4,
        status: RiskStatus::Pending,
        residual_score: 3.2,
        target_score: 2.0,
        justification: None,
        mitigation: None,
        created_by: None,
        created_at: None,
    }
}

fn sample_control() -> Control {
    Control {
        id: "65bb".to_owned(),
        code: "AI-GOV-01".to_owned(),
        section: "Governance".to_owned(),
        control: "Maintain an AI system inventory".to_owned(),
        requirements: "Inventory reviewed quarterly".to_owned(),
        related_risks: "RA-001".to_owned(),
        status: ControlStatus::InProgress,
        tickets: "OPS-42".to_owned(),
        project_id: None,
    }
}

#[test]
fn risk_rows_prefer_creator_name_then_owner_then_na() {
    let mut risk = sample_risk();
    risk.created_by = Some(CreatedBy { name: Some("Dana".to_owned()), email: None });
    assert_eq!(risk_export_rows(&[risk.clone()])[0][5], "Dana");

    risk.created_by = None;
    assert_eq!(risk_export_rows(&[risk.clone()])[0][5], "Priya");

    risk.risk_owner = None;
    assert_eq!(risk_export_rows(&[risk])[0][5], "N/A");
}

#[test]
fn risk_rows_render_level_with_numeric_severity() {
    let rows = risk_export_rows(&[sample_risk()]);
    assert_eq!(rows[0][3], "High (4)");
    assert_eq!(rows[0][4], "Pending");
    assert_eq!(rows[0].len(), RISK_EXPORT_HEADER.len());
}

#[test]
fn control_rows_follow_the_header_layout() {
    let rows = control_export_rows(&[sample_control()]);
    assert_eq!(rows[0].len(), CONTROL_EXPORT_HEADER.len());
    assert_eq!(rows[0][0], "AI-GOV-01");
    assert_eq!(rows[0][5], "In Progress");
}

#[test]
fn workbook_bytes_produce_a_zip_container() {
    let rows = risk_export_rows(&[sample_risk()]);
    let bytes = workbook_bytes("AI Risks", &RISK_EXPORT_HEADER, &rows).unwrap();
    // xlsx is a zip archive; check the magic.
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn pdf_bytes_start_with_the_pdf_header() {
    let rows = control_export_rows(&[sample_control()]);
    let bytes = pdf_table_bytes("Control Assessment", &CONTROL_EXPORT_HEADER, &rows).unwrap();
    assert_eq!(&bytes[..5], b"%PDF-");
}

#[test]
fn pdf_handles_enough_rows_to_paginate() {
    let rows: Vec<Vec<String>> = (0..120)
        .map(|i| vec![format!("RA-{i:03}"), "p".into(), "n".into(), "l".into(), "s".into(), "o".into()])
        .collect();
    let bytes = pdf_table_bytes("AI Risks", &RISK_EXPORT_HEADER, &rows).unwrap();
    assert!(bytes.len() > 1000);
}
