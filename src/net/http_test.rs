use super::*;

#[test]
fn query_string_is_empty_without_pairs() {
    assert_eq!(QueryParams::new().to_query_string(), "");
}

#[test]
fn query_string_joins_and_encodes_pairs() {
    let mut params = QueryParams::new();
    params.push("page", 2).push("sortBy", "createdAt").push("search", "model drift");
    assert_eq!(params.to_query_string(), "?page=2&sortBy=createdAt&search=model+drift");
}

#[test]
fn query_string_escapes_reserved_characters() {
    let mut params = QueryParams::new();
    params.push("search", "a&b=c%d");
    assert_eq!(params.to_query_string(), "?search=a%26b%3Dc%25d");
}

#[test]
fn push_non_empty_skips_blank_values() {
    let mut params = QueryParams::new();
    params.push_non_empty("search", "   ").push_non_empty("projectId", "p1");
    assert_eq!(params.to_query_string(), "?projectId=p1");
}

#[test]
fn push_filter_skips_the_all_sentinel() {
    let mut params = QueryParams::new();
    params
        .push_filter("status", "all")
        .push_filter("projectId", "proj-9")
        .push_filter("search", "");
    assert_eq!(params.to_query_string(), "?projectId=proj-9");
}
