//! Trigger a browser download for client-generated bytes.
//!
//! Used by the risk, control, and inventory export buttons. The file is
//! materialized as a Blob object URL, clicked through a transient anchor,
//! and the URL is revoked immediately after.

/// Standard MIME type for `.xlsx` exports.
pub const XLSX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Standard MIME type for `.pdf` exports.
pub const PDF_MIME: &str = "application/pdf";

/// Standard MIME type for `.csv` exports.
pub const CSV_MIME: &str = "text/csv;charset=utf-8";

#[cfg(feature = "hydrate")]
pub fn save_bytes(filename: &str, mime: &str, bytes: &[u8]) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_buffer_source_sequence_and_options(&parts, &options)
        .map_err(|_| "failed to construct blob".to_owned())?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "failed to create object URL".to_owned())?;

    let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
    let document = window.document().ok_or_else(|| "no document".to_owned())?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "failed to create anchor".to_owned())?
        .dyn_into()
        .map_err(|_| "anchor cast failed".to_owned())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(not(feature = "hydrate"))]
pub fn save_bytes(_filename: &str, _mime: &str, _bytes: &[u8]) -> Result<(), String> {
    Err("downloads are only available in the browser".to_owned())
}

/// UTF-8 text convenience wrapper over [`save_bytes`].
pub fn save_text(filename: &str, mime: &str, text: &str) -> Result<(), String> {
    save_bytes(filename, mime, text.as_bytes())
}
