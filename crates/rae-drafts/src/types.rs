//! Stored-draft payload and listing types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rae_model::{AssignmentState, ProgramId};

use crate::error::DraftError;

fn default_version() -> String {
    "1.0".to_string()
}

/// Identifier of a stored draft: the normalized `{program}_{name}` pair.
///
/// Saving under an existing name within the same program produces the same
/// ID and overwrites the previous payload (create-or-replace).
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct DraftId(String);

impl DraftId {
    /// Derive the ID for a draft name scoped to a program. The name is
    /// normalized (trimmed, lowercased, whitespace collapsed to `-`) so it
    /// is safe as a filename stem; an empty normalized name is rejected.
    pub fn derive(program_id: &ProgramId, name: &str) -> Result<Self, DraftError> {
        let slug = normalize_component(name);
        if slug.is_empty() {
            return Err(DraftError::InvalidName(name.to_string()));
        }
        Ok(Self(format!(
            "{}_{slug}",
            normalize_component(program_id.as_str())
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DraftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn normalize_component(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// A draft as it is persisted: the snapshot plus metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDraft {
    pub id: DraftId,
    pub name: String,
    pub program_id: ProgramId,
    pub state: AssignmentState,
    pub saved_at: DateTime<Utc>,
    /// Payload format version, for forward-compatible loading.
    #[serde(default = "default_version")]
    pub version: String,
}

impl StoredDraft {
    pub fn new(
        program_id: ProgramId,
        name: impl Into<String>,
        state: AssignmentState,
    ) -> Result<Self, DraftError> {
        let name = name.into();
        let id = DraftId::derive(&program_id, &name)?;
        Ok(Self {
            id,
            name,
            program_id,
            state,
            saved_at: Utc::now(),
            version: default_version(),
        })
    }
}

/// Listing entry for the drafts picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSummary {
    pub id: DraftId,
    pub name: String,
    pub updated_at: DateTime<Utc>,
}
