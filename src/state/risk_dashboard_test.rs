use super::*;

fn risk(id: &str, severity: i32, status: RiskStatus, project: Option<&str>) -> Risk {
    Risk {
        id: id.to_owned(),
        risk_assessment_id: format!("RA-{id}"),
        project_id: project.map(str::to_owned),
        risk_name: format!("Risk {id}"),
        risk_owner: None,
        severity,
        status,
        residual_score: f64::from(severity) - 1.0,
        target_score: 1.0,
        justification: None,
        mitigation: None,
        created_by: None,
        created_at: None,
    }
}

#[test]
fn default_filters_query_omits_search_and_sentinels() {
    let filters = RiskFilters::default();
    assert_eq!(
        filters.list_query(),
        "?page=1&limit=10&sortBy=createdAt&sortOrder=desc"
    );
}

#[test]
fn active_filters_appear_in_the_query() {
    let mut filters = RiskFilters::default();
    filters.set_search("drift");
    filters.set_project("proj-1");
    filters.set_status("Pending");
    filters.set_page(3);
    assert_eq!(
        filters.list_query(),
        "?page=3&limit=10&search=drift&projectId=proj-1&status=Pending&sortBy=createdAt&sortOrder=desc"
    );
}

#[test]
fn any_filter_change_resets_the_page() {
    let mut filters = RiskFilters::default();
    filters.set_page(4);
    filters.set_status("Completed");
    assert_eq!(filters.page, 1);

    filters.set_page(4);
    filters.set_project("proj-1");
    assert_eq!(filters.page, 1);

    filters.set_page(4);
    filters.set_search("x");
    assert_eq!(filters.page, 1);
}

#[test]
fn export_query_uses_the_known_total_or_the_fallback_window() {
    let filters = RiskFilters::default();
    assert!(filters.export_query(Some(37)).contains("limit=37"));
    assert!(filters.export_query(None).contains("limit=1000"));
    assert!(filters.export_query(Some(0)).contains("limit=1000"));
    assert!(filters.export_query(Some(37)).contains("page=1"));
}

#[test]
fn pie_buckets_drop_empty_levels_and_exclude_sub_low() {
    let risks = [
        risk("1", 5, RiskStatus::Pending, None),
        risk("2", 5, RiskStatus::Pending, None),
        risk("3", 3, RiskStatus::Pending, None),
        risk("4", 1, RiskStatus::Pending, None),
    ];
    let buckets = pie_buckets(&risks);
    let labels: Vec<&str> = buckets.iter().map(|(l, _, _)| l.as_str()).collect();
    assert_eq!(labels, ["Critical", "Medium"]);
    assert_eq!(buckets[0].1, 2);
}

#[test]
fn strategy_progress_counts_every_status() {
    let risks = [
        risk("1", 3, RiskStatus::Completed, None),
        risk("2", 3, RiskStatus::Pending, None),
        risk("3", 3, RiskStatus::Rejected, None),
        risk("4", 3, RiskStatus::Completed, None),
    ];
    let progress = strategy_progress(&risks);
    assert_eq!(progress.completed, 2);
    assert_eq!(progress.pending, 1);
    assert_eq!(progress.rejected, 1);
    assert_eq!(progress.total, 4);
    assert!((progress.completed_percent() - 50.0).abs() < 1e-9);
}

#[test]
fn heatmap_counts_land_on_the_diagonal() {
    let risks = [
        risk("1", 4, RiskStatus::Pending, None),
        risk("2", 4, RiskStatus::Pending, None),
        risk("3", 9, RiskStatus::Pending, None),
        risk("4", 0, RiskStatus::Pending, None),
    ];
    let cells = heatmap_cells(&risks);
    assert_eq!(cells[3][3], 2);
    // Out-of-range severities clamp into the grid.
    assert_eq!(cells[4][4], 1);
    assert_eq!(cells[0][0], 1);
    for (i, row) in cells.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            if i != j {
                assert_eq!(*cell, 0);
            }
        }
    }
}

#[test]
fn project_bars_average_per_project_and_group_unassigned() {
    let risks = [
        risk("1", 4, RiskStatus::Pending, Some("alpha")),
        risk("2", 2, RiskStatus::Pending, Some("alpha")),
        risk("3", 5, RiskStatus::Pending, None),
    ];
    let bars = project_bars(&risks);
    assert_eq!(bars.len(), 2);
    let alpha = bars.iter().find(|b| b.project == "alpha").unwrap();
    assert_eq!(alpha.count, 2);
    assert!((alpha.avg_severity - 3.0).abs() < 1e-9);
    assert!(bars.iter().any(|b| b.project == "Unassigned"));
}

#[test]
fn status_updates_require_a_linked_project() {
    let orphan = risk("1", 3, RiskStatus::Pending, None);
    assert!(status_update_guard(&orphan).is_err());
    let linked = risk("2", 3, RiskStatus::Pending, Some("proj-1"));
    assert!(status_update_guard(&linked).is_ok());
}

#[test]
fn apply_status_locally_patches_only_the_target_row() {
    let mut risks = vec![
        risk("1", 3, RiskStatus::Pending, Some("p")),
        risk("2", 3, RiskStatus::Pending, Some("p")),
    ];
    apply_status_locally(&mut risks, "2", RiskStatus::Completed);
    assert_eq!(risks[0].status, RiskStatus::Pending);
    assert_eq!(risks[1].status, RiskStatus::Completed);
}

#[test]
fn new_risk_form_defaults_to_medium_severity() {
    let form = NewRiskForm::default();
    assert_eq!(form.severity, 3);
    assert!(!form.is_valid());
}

#[test]
fn new_risk_payload_serializes_camel_case() {
    let form = NewRiskForm {
        risk_name: " Model drift ".to_owned(),
        risk_owner: "Priya".to_owned(),
        severity: 4,
        justification: String::new(),
        mitigation: String::new(),
    };
    let json = serde_json::to_value(form.to_payload("proj-1")).unwrap();
    assert_eq!(json["riskName"], "Model drift");
    assert_eq!(json["projectId"], "proj-1");
    assert_eq!(json["severity"], 4);
}
