//! CSV rendition of a finalized assignment list.

use csv::{QuoteStyle, WriterBuilder};

use crate::error::{ExportError, Result};
use crate::records::AssignmentRecord;

const HEADER: [&str; 4] = ["Student", "Referent", "Program", "Assigned At"];

/// Render assignment rows as CSV text: one header row plus one row per
/// record. Every field is quoted unconditionally (embedded quotes
/// doubled), so the output parses the same regardless of field content.
/// The whole document is built in memory; an error means nothing was
/// produced, never a truncated file.
pub fn to_csv(records: &[AssignmentRecord]) -> Result<String> {
    if records.is_empty() {
        return Err(ExportError::NoAssignments);
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer
        .write_record(HEADER)
        .map_err(|e| ExportError::Csv(e.to_string()))?;
    for record in records {
        writer
            .write_record([
                record.student.as_str(),
                record.referent.as_str(),
                record.program.as_str(),
                record.assigned_at_text().as_str(),
            ])
            .map_err(|e| ExportError::Csv(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Csv(e.to_string()))
}
