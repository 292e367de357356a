//! Printable (PDF) rendition of a finalized assignment list.
//!
//! A4 portrait, builtin Helvetica, one line per assignment, paginated.
//! Layout is intentionally plain: the print dialog is the consumer, not a
//! design surface.

use printpdf::{BuiltinFont, Mm, PdfDocument, PdfDocumentReference};

use crate::error::{ExportError, Result};
use crate::records::AssignmentRecord;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const LINE_HEIGHT_MM: f32 = 6.0;
const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 10.0;

/// Render assignment rows into a PDF document, returned as bytes for the
/// host's download/print dialog. Fails on empty input rather than
/// emitting an empty document.
pub fn to_pdf(records: &[AssignmentRecord], title: &str) -> Result<Vec<u8>> {
    if records.is_empty() {
        return Err(ExportError::NoAssignments);
    }

    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "assignments",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut cursor_mm = PAGE_HEIGHT_MM - MARGIN_MM;

    layer.use_text(title, TITLE_SIZE, Mm(MARGIN_MM), Mm(cursor_mm), &bold);
    cursor_mm -= 2.0 * LINE_HEIGHT_MM;

    for record in records {
        if cursor_mm < MARGIN_MM {
            layer = add_page(&doc);
            cursor_mm = PAGE_HEIGHT_MM - MARGIN_MM;
        }
        // Builtin fonts are WinAnsi-encoded; stick to ASCII separators.
        let line = format!(
            "{}  ->  {}   ({}, {})",
            record.student,
            record.referent,
            record.program,
            record.assigned_at_text()
        );
        layer.use_text(line, BODY_SIZE, Mm(MARGIN_MM), Mm(cursor_mm), &font);
        cursor_mm -= LINE_HEIGHT_MM;
    }

    doc.save_to_bytes()
        .map_err(|e| ExportError::Pdf(e.to_string()))
}

fn add_page(doc: &PdfDocumentReference) -> printpdf::PdfLayerReference {
    let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "assignments");
    doc.get_page(page).get_layer(layer)
}
