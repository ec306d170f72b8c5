use super::*;

#[test]
fn pdf_under_the_limit_passes() {
    assert!(validate_attachment("application/pdf", MAX_ATTACHMENT_BYTES).is_ok());
}

#[test]
fn non_pdf_is_rejected_before_size_is_considered() {
    let err = validate_attachment("image/png", 10).unwrap_err();
    assert_eq!(err, PDF_ONLY_MESSAGE);
}

#[test]
fn oversized_pdf_is_rejected() {
    let err = validate_attachment("application/pdf", MAX_ATTACHMENT_BYTES + 1).unwrap_err();
    assert_eq!(err, TOO_LARGE_MESSAGE);
}

#[test]
fn rejected_pick_clears_the_selection_and_sets_the_error() {
    let mut composer = CommentComposer::default();
    composer.pick_file("ok.pdf", "application/pdf", 100);
    assert!(composer.attachment.is_some());

    composer.pick_file("bad.png", "image/png", 100);
    assert!(composer.attachment.is_none());
    assert_eq!(composer.error.as_deref(), Some(PDF_ONLY_MESSAGE));
}

#[test]
fn server_413_maps_to_the_too_large_message() {
    let error = ApiError::Http { status: 413, message: "Payload Too Large".to_owned() };
    assert_eq!(upload_error_message(&error), SERVER_TOO_LARGE_MESSAGE);
}

#[test]
fn server_400_mentioning_pdf_maps_to_the_pdf_only_message() {
    let error = ApiError::Http { status: 400, message: "Only PDF uploads accepted".to_owned() };
    assert_eq!(upload_error_message(&error), PDF_ONLY_MESSAGE);
}

#[test]
fn other_errors_pass_through_their_display_text() {
    let error = ApiError::Http { status: 500, message: "boom".to_owned() };
    assert_eq!(upload_error_message(&error), "boom");
}

#[test]
fn composer_needs_text_or_an_attachment() {
    let mut composer = CommentComposer::default();
    assert!(!composer.can_submit());
    composer.text = "  looks good  ".to_owned();
    assert!(composer.can_submit());
    composer.text.clear();
    composer.pick_file("a.pdf", "application/pdf", 1);
    assert!(composer.can_submit());
}

#[test]
fn edit_mode_seeds_text_and_reset_clears_everything() {
    let mut composer = CommentComposer::default();
    composer.start_edit("c-1", "original text");
    assert_eq!(composer.editing.as_deref(), Some("c-1"));
    assert_eq!(composer.text, "original text");
    composer.reset();
    assert_eq!(composer, CommentComposer::default());
}
