//! In-browser spreadsheet and PDF serialization for the export buttons.
//!
//! DESIGN
//! ======
//! Exports re-fetch the full unpaginated result set for the current filters
//! and serialize it here; both serializers are pure byte producers so the
//! logic is unit-testable off the browser. Failures surface as an error
//! banner on the page and never crash the view.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use printpdf::{BuiltinFont, Mm, PdfDocument};
use rust_xlsxwriter::Workbook;
use thiserror::Error;

use crate::net::types::{Control, Risk};
use crate::util::severity::severity_text;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to build spreadsheet: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("failed to build PDF: {0}")]
    Pdf(#[from] printpdf::Error),
}

/// Column headers for a risk export.
pub const RISK_EXPORT_HEADER: [&str; 6] =
    ["Risk ID", "Project ID", "Name", "Risk Level", "Strategy", "Risk Owner"];

/// Column headers for a control export.
pub const CONTROL_EXPORT_HEADER: [&str; 7] =
    ["Code", "Section", "Control", "Requirements", "Risk Associated", "Status", "Tickets"];

/// Flatten risks into export rows matching [`RISK_EXPORT_HEADER`].
pub fn risk_export_rows(risks: &[Risk]) -> Vec<Vec<String>> {
    risks
        .iter()
        .map(|risk| {
            let owner = risk
                .created_by
                .as_ref()
                .and_then(|c| c.name.clone())
                .or_else(|| risk.risk_owner.clone())
                .unwrap_or_else(|| "N/A".to_owned());
            vec![
                risk.risk_assessment_id.clone(),
                risk.project_id.clone().unwrap_or_else(|| "N/A".to_owned()),
                risk.risk_name.clone(),
                format!("{} ({})", severity_text(risk.severity), risk.severity),
                risk.status.as_str().to_owned(),
                owner,
            ]
        })
        .collect()
}

/// Flatten controls into export rows matching [`CONTROL_EXPORT_HEADER`].
pub fn control_export_rows(controls: &[Control]) -> Vec<Vec<String>> {
    controls
        .iter()
        .map(|control| {
            vec![
                control.code.clone(),
                control.section.clone(),
                control.control.clone(),
                control.requirements.clone(),
                control.related_risks.clone(),
                control.status.as_str().to_owned(),
                control.tickets.clone(),
            ]
        })
        .collect()
}

/// Serialize a single-sheet workbook to `.xlsx` bytes.
pub fn workbook_bytes(
    sheet_name: &str,
    header: &[&str],
    rows: &[Vec<String>],
) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;
    for (col, title) in header.iter().enumerate() {
        worksheet.write_string(0, u16::try_from(col).unwrap_or(u16::MAX), *title)?;
    }
    for (row_index, row) in rows.iter().enumerate() {
        let row_num = u32::try_from(row_index + 1).unwrap_or(u32::MAX);
        for (col, value) in row.iter().enumerate() {
            worksheet.write_string(row_num, u16::try_from(col).unwrap_or(u16::MAX), value)?;
        }
    }
    Ok(workbook.save_to_buffer()?)
}

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 14.0;
const ROW_STEP_MM: f32 = 7.0;

/// Serialize a titled table to `.pdf` bytes, paginating as needed.
pub fn pdf_table_bytes(
    title: &str,
    header: &[&str],
    rows: &[Vec<String>],
) -> Result<Vec<u8>, ExportError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "table");
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let column_width = (PAGE_WIDTH_MM - 2.0 * MARGIN_MM) / header.len().max(1) as f32;
    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

    layer.use_text(title, 14.0, Mm(MARGIN_MM), Mm(y), &bold);
    y -= ROW_STEP_MM * 1.5;
    for (col, cell) in header.iter().enumerate() {
        let x = MARGIN_MM + column_width * col as f32;
        layer.use_text(*cell, 9.0, Mm(x), Mm(y), &bold);
    }
    y -= ROW_STEP_MM;

    for row in rows {
        if y < MARGIN_MM {
            let (page, page_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "table");
            layer = doc.get_page(page).get_layer(page_layer);
            y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
        for (col, cell) in row.iter().enumerate() {
            let x = MARGIN_MM + column_width * col as f32;
            layer.use_text(truncate_cell(cell), 8.0, Mm(x), Mm(y), &font);
        }
        y -= ROW_STEP_MM;
    }

    Ok(doc.save_to_bytes()?)
}

/// Keep table cells to one line; long requirement texts get an ellipsis.
fn truncate_cell(cell: &str) -> String {
    const MAX: usize = 38;
    if cell.chars().count() <= MAX {
        cell.to_owned()
    } else {
        let head: String = cell.chars().take(MAX - 1).collect();
        format!("{head}\u{2026}")
    }
}
