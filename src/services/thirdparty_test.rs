use super::*;

#[test]
fn one_path_shape_serves_project_listing_and_record_updates() {
    assert_eq!(thirdparty_endpoint("p-1"), "/thirdparty/p-1");
    assert_eq!(thirdparty_endpoint("tp-33"), "/thirdparty/tp-33");
}
