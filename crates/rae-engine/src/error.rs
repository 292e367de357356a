//! Error types for assignment mutations.

use rae_model::{ReferentId, StudentId};
use thiserror::Error;

/// Errors from store-boundary mutations.
///
/// Pure computations (scoring, workloads, planning) never fail on
/// well-typed input; referencing a student or referent outside the current
/// pool is the one case callers must handle explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("unknown student: {0}")]
    UnknownStudent(StudentId),
    #[error("unknown referent: {0}")]
    UnknownReferent(ReferentId),
}

pub type Result<T> = std::result::Result<T, EngineError>;
