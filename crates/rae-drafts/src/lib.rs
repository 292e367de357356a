#![deny(unsafe_code)]

pub mod error;
pub mod repository;
pub mod types;

pub use error::{DraftError, Result};
pub use repository::{DraftStore, FsDraftRepository};
pub use types::{DraftId, DraftSummary, StoredDraft};
