//! Comment thread state: composer, edit mode, and attachment gating.
//!
//! A comment carries at most one attachment; the file is gated client-side
//! before any upload starts, and a rejected pick leaves no file selected.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use crate::net::error::ApiError;

pub const MAX_ATTACHMENT_BYTES: u64 = 10 * 1024 * 1024;
pub const PDF_ONLY_MESSAGE: &str = "Only PDF files are allowed as attachments.";
pub const TOO_LARGE_MESSAGE: &str = "File size must be less than 10MB.";
pub const SERVER_TOO_LARGE_MESSAGE: &str =
    "File too large. Please choose a file smaller than 10MB.";

/// A locally selected file pending upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingAttachment {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

/// Gate a picked file before upload. Only PDFs up to 10 MB pass.
pub fn validate_attachment(mime: &str, size: u64) -> Result<(), String> {
    if mime != "application/pdf" {
        return Err(PDF_ONLY_MESSAGE.to_owned());
    }
    if size > MAX_ATTACHMENT_BYTES {
        return Err(TOO_LARGE_MESSAGE.to_owned());
    }
    Ok(())
}

/// Map upload failures onto the messages the thread shows inline.
pub fn upload_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Http { status: 413, .. } => SERVER_TOO_LARGE_MESSAGE.to_owned(),
        ApiError::Http { status: 400, message } if message.to_lowercase().contains("pdf") => {
            PDF_ONLY_MESSAGE.to_owned()
        }
        other => other.to_string(),
    }
}

/// Composer plus edit-mode state for one project's thread.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentComposer {
    pub text: String,
    pub attachment: Option<PendingAttachment>,
    /// Comment id currently being edited, if any.
    pub editing: Option<String>,
    pub error: Option<String>,
}

impl CommentComposer {
    /// Apply a file pick; rejected files clear the selection and set the
    /// inline error.
    pub fn pick_file(&mut self, name: &str, mime: &str, size: u64) {
        match validate_attachment(mime, size) {
            Ok(()) => {
                self.attachment = Some(PendingAttachment {
                    name: name.to_owned(),
                    mime: mime.to_owned(),
                    size,
                });
                self.error = None;
            }
            Err(message) => {
                self.attachment = None;
                self.error = Some(message);
            }
        }
    }

    pub fn clear_file(&mut self) {
        self.attachment = None;
    }

    /// A comment needs text or an attachment to be submittable.
    pub fn can_submit(&self) -> bool {
        !self.text.trim().is_empty() || self.attachment.is_some()
    }

    /// Enter edit mode for an existing comment, seeding the text box.
    pub fn start_edit(&mut self, comment_id: &str, current_text: &str) {
        self.editing = Some(comment_id.to_owned());
        self.text = current_text.to_owned();
        self.attachment = None;
        self.error = None;
    }

    pub fn cancel_edit(&mut self) {
        *self = Self::default();
    }

    /// Reset after a successful post or edit.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
