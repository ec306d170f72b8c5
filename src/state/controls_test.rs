use super::*;

fn control(id: &str, status: ControlStatus, project: Option<&str>) -> Control {
    Control {
        id: id.to_owned(),
        code: format!("C-{id}"),
        section: "Governance".to_owned(),
        control: format!("Control {id}"),
        requirements: String::new(),
        related_risks: String::new(),
        status,
        tickets: String::new(),
        project_id: project.map(str::to_owned),
    }
}

fn table_with(n: usize) -> ControlTable {
    let mut table = ControlTable::default();
    table.load(
        (0..n)
            .map(|i| control(&i.to_string(), ControlStatus::NotImplemented, Some("alpha")))
            .collect(),
    );
    table
}

#[test]
fn fetch_query_requests_the_wide_window() {
    assert_eq!(ControlTable::fetch_query(), "?page=1&limit=1000");
}

#[test]
fn page_count_is_ceil_over_fifteen() {
    assert_eq!(table_with(0).page_count(), 1);
    assert_eq!(table_with(15).page_count(), 1);
    assert_eq!(table_with(16).page_count(), 2);
    assert_eq!(table_with(45).page_count(), 3);
}

#[test]
fn set_page_clamps_into_range() {
    let mut table = table_with(31);
    table.set_page(99);
    assert_eq!(table.page(), 3);
    table.set_page(0);
    assert_eq!(table.page(), 1);
}

#[test]
fn visible_returns_the_requested_window() {
    let mut table = table_with(40);
    table.set_page(3);
    let visible = table.visible();
    assert_eq!(visible.len(), 10);
    assert_eq!(visible[0].id, "30");
}

#[test]
fn filters_apply_locally_and_reset_the_page() {
    let mut table = ControlTable::default();
    table.load(vec![
        control("1", ControlStatus::Implemented, Some("alpha")),
        control("2", ControlStatus::InProgress, Some("beta")),
        control("3", ControlStatus::Implemented, Some("beta")),
    ]);
    table.set_page(1);
    table.set_status_filter("Implemented");
    assert_eq!(table.filtered().len(), 2);
    table.set_project_filter("beta");
    assert_eq!(table.filtered().len(), 1);
    assert_eq!(table.filtered()[0].id, "3");
    assert_eq!(table.page(), 1);
}

#[test]
fn unique_projects_are_sorted_and_deduplicated() {
    let mut table = ControlTable::default();
    table.load(vec![
        control("1", ControlStatus::Implemented, Some("beta")),
        control("2", ControlStatus::Implemented, Some("alpha")),
        control("3", ControlStatus::Implemented, Some("beta")),
        control("4", ControlStatus::Implemented, None),
    ]);
    assert_eq!(table.unique_projects(), ["alpha", "beta"]);
}

#[test]
fn status_change_is_applied_optimistically() {
    let mut table = table_with(2);
    let command = table
        .begin_status_change("1", ControlStatus::Implemented)
        .unwrap();
    assert_eq!(command.previous, ControlStatus::NotImplemented);
    assert_eq!(table.controls()[1].status, ControlStatus::Implemented);
}

#[test]
fn selecting_the_current_status_issues_no_command() {
    let mut table = table_with(1);
    assert!(table.begin_status_change("0", ControlStatus::NotImplemented).is_none());
}

#[test]
fn rollback_restores_the_previous_status() {
    let mut table = table_with(1);
    let command = table
        .begin_status_change("0", ControlStatus::InProgress)
        .unwrap();
    table.rollback(&command);
    assert_eq!(table.controls()[0].status, ControlStatus::NotImplemented);
}
