//! Error types for draft persistence.

use thiserror::Error;

/// Failures crossing the draft-storage boundary.
///
/// Everything storage-related is folded into structured variants so the
/// caller always gets a renderable message back instead of a panic or an
/// unhandled exception; the UI turns these into a toast and may retry.
#[derive(Debug, Error)]
pub enum DraftError {
    #[error("invalid draft name: {0:?}")]
    InvalidName(String),
    #[error("draft not found: {0}")]
    NotFound(String),
    #[error("storage failure: {0}")]
    Storage(String),
    #[error("corrupt draft payload: {0}")]
    Corrupt(String),
}

impl DraftError {
    pub(crate) fn storage(context: &str, err: &dyn std::fmt::Display) -> Self {
        Self::Storage(format!("{context}: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, DraftError>;
