use super::*;

#[test]
fn plain_fields_pass_through() {
    assert_eq!(escape_field("asset-1"), "asset-1");
}

#[test]
fn fields_with_commas_quotes_or_newlines_are_quoted() {
    assert_eq!(escape_field("a,b"), "\"a,b\"");
    assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    assert_eq!(escape_field("line1\nline2"), "\"line1\nline2\"");
}

#[test]
fn to_csv_emits_header_then_rows_with_crlf() {
    let csv = to_csv(
        &["Name", "Owner"],
        &[
            vec!["Model A".to_owned(), "QA, team".to_owned()],
            vec!["Model B".to_owned(), "Ops".to_owned()],
        ],
    );
    assert_eq!(csv, "Name,Owner\r\nModel A,\"QA, team\"\r\nModel B,Ops\r\n");
}
