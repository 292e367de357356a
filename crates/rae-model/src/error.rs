use thiserror::Error;

/// Errors from constructing or validating model types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid student id: {0:?}")]
    InvalidStudentId(String),
    #[error("invalid referent id: {0:?}")]
    InvalidReferentId(String),
    #[error("invalid program id: {0:?}")]
    InvalidProgramId(String),
    #[error("duplicate student id: {0}")]
    DuplicateStudent(String),
    #[error("duplicate referent id: {0}")]
    DuplicateReferent(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
