use super::*;

#[test]
fn enveloped_comment_lists_are_unwrapped() {
    let json = r#"{"success":true,"data":[{"commentId":"c-1","text":"looks good"}]}"#;
    let body: CommentListBody = serde_json::from_str(json).unwrap();
    let comments = normalize_list(body);
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].comment_id, "c-1");
}

#[test]
fn bare_array_responses_still_parse() {
    let json = r#"[{"commentId":"c-2","text":"older backend"}]"#;
    let body: CommentListBody = serde_json::from_str(json).unwrap();
    assert_eq!(normalize_list(body)[0].comment_id, "c-2");
}

#[test]
fn single_comment_envelope_and_bare_object_both_parse() {
    let enveloped: CommentBody =
        serde_json::from_str(r#"{"success":true,"data":{"commentId":"c-3","text":"t"}}"#).unwrap();
    assert_eq!(normalize_one(enveloped).comment_id, "c-3");

    let plain: CommentBody =
        serde_json::from_str(r#"{"commentId":"c-4","text":"t"}"#).unwrap();
    assert_eq!(normalize_one(plain).comment_id, "c-4");
}

#[test]
fn attachment_metadata_rides_along() {
    let json = r#"{"commentId":"c-5","text":"see attached","attachment":"/files/a.pdf","attachmentInfo":{"originalName":"a.pdf","size":2048}}"#;
    let comment: Comment = serde_json::from_str(json).unwrap();
    assert_eq!(comment.attachment_info.unwrap().original_name, "a.pdf");
}
