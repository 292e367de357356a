//! Error types for export rendering.

use thiserror::Error;

/// Export failures. Rendering is all-or-nothing: any error means no
/// partial file was produced.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export: the assignment list is empty")]
    NoAssignments,
    #[error("csv rendering failed: {0}")]
    Csv(String),
    #[error("pdf rendering failed: {0}")]
    Pdf(String),
}

pub type Result<T> = std::result::Result<T, ExportError>;
