use super::*;

fn record(name: &str, record_type: RecordType, usage: AiUsage, contact: &str) -> InventoryRecord {
    InventoryRecord {
        id: 0,
        name: name.to_owned(),
        record_type,
        contact: contact.to_owned(),
        last_updated: "06-04-2025 04:18 PM".to_owned(),
        ai_usage: usage,
        data_processing: "-".to_owned(),
    }
}

fn seeded() -> InventoryTable {
    let mut table = InventoryTable::with_records(Vec::new());
    table.add(record("Vertex AI", RecordType::System, AiUsage::High, "Zissis K."));
    table.add(record("Gainsight", RecordType::Vendor, AiUsage::High, "-"));
    table.add(record("Authbridge", RecordType::Vendor, AiUsage::Low, "-"));
    table
}

#[test]
fn add_assigns_sequential_ids() {
    let mut table = seeded();
    let id = table.add(record("New", RecordType::Vendor, AiUsage::Low, "-"));
    assert_eq!(id, 4);
}

#[test]
fn search_matches_name_type_and_contact_case_insensitively() {
    let mut table = seeded();
    table.search = "vertex".to_owned();
    assert_eq!(table.filtered().len(), 1);
    table.search = "VENDOR".to_owned();
    assert_eq!(table.filtered().len(), 2);
    table.search = "zissis".to_owned();
    assert_eq!(table.filtered().len(), 1);
}

#[test]
fn filter_accepts_a_type_or_a_status_key() {
    let mut table = seeded();
    table.filter = "system".to_owned();
    assert_eq!(table.filtered().len(), 1);
    table.filter = "high".to_owned();
    assert_eq!(table.filtered().len(), 2);
    table.filter = "all".to_owned();
    assert_eq!(table.filtered().len(), 3);
}

#[test]
fn select_all_visible_only_covers_the_filtered_rows() {
    let mut table = seeded();
    table.filter = "high".to_owned();
    table.select_all_visible(true);
    assert_eq!(table.selected().len(), 2);
    table.select_all_visible(false);
    assert!(table.selected().is_empty());
}

#[test]
fn delete_selected_removes_rows_and_clears_the_selection() {
    let mut table = seeded();
    table.toggle_selected(1, true);
    table.toggle_selected(3, true);
    assert_eq!(table.delete_selected(), 2);
    assert_eq!(table.records().len(), 1);
    assert!(table.selected().is_empty());
}

#[test]
fn delete_with_no_selection_is_a_no_op() {
    let mut table = seeded();
    assert_eq!(table.delete_selected(), 0);
    assert_eq!(table.records().len(), 3);
}

#[test]
fn update_replaces_an_existing_row_by_id() {
    let mut table = seeded();
    let mut edited = record("Vertex AI", RecordType::System, AiUsage::Medium, "New Contact");
    edited.id = 1;
    assert!(table.update(edited));
    assert_eq!(table.records()[0].ai_usage, AiUsage::Medium);

    let mut missing = record("Ghost", RecordType::Vendor, AiUsage::Low, "-");
    missing.id = 99;
    assert!(!table.update(missing));
}

#[test]
fn csv_export_follows_the_table_filters() {
    let mut table = seeded();
    table.filter = "system".to_owned();
    let csv = table.to_csv();
    assert!(csv.starts_with("Name,Type,Contact,Last Updated,AI Usage,Data Processing\r\n"));
    assert!(csv.contains("Vertex AI"));
    assert!(!csv.contains("Gainsight"));
}
