//! Draft persistence: the storage contract and a filesystem
//! implementation.
//!
//! Drafts are stored one JSON file per draft, named `{draft_id}.json`
//! where the ID is the normalized `{program}_{name}` pair — so saving the
//! same name twice within a program overwrites the earlier payload.
//! The engine proper never performs I/O; hosts with their own backend
//! implement [`DraftStore`] and hand it to the UI layer, while
//! [`FsDraftRepository`] covers hosts without one.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use rae_model::{AssignmentState, ProgramId};

use crate::error::{DraftError, Result};
use crate::types::{DraftId, DraftSummary, StoredDraft};

/// Narrow storage contract for named assignment-plan snapshots.
///
/// All methods return structured errors; implementations must not panic
/// on storage failures.
pub trait DraftStore {
    /// Create or replace the draft `name` scoped to `program_id`.
    fn save(
        &self,
        program_id: &ProgramId,
        name: &str,
        state: &AssignmentState,
    ) -> Result<DraftId>;

    /// Summaries of every draft belonging to `program_id`, sorted by
    /// draft ID for stable listings.
    fn list(&self, program_id: &ProgramId) -> Result<Vec<DraftSummary>>;

    /// Load a draft by ID; [`DraftError::NotFound`] if it does not exist.
    fn load(&self, draft_id: &DraftId) -> Result<StoredDraft>;

    /// Delete a draft by ID; [`DraftError::NotFound`] if it does not
    /// exist.
    fn delete(&self, draft_id: &DraftId) -> Result<()>;
}

/// Directory-backed [`DraftStore`], one JSON file per draft.
#[derive(Debug, Clone)]
pub struct FsDraftRepository {
    base_dir: PathBuf,
}

impl FsDraftRepository {
    /// Open a repository at `base_dir`, creating the directory if needed.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir).map_err(|e| {
            DraftError::storage(
                &format!("failed to create draft directory {}", base_dir.display()),
                &e,
            )
        })?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn draft_path(&self, draft_id: &DraftId) -> PathBuf {
        self.base_dir.join(format!("{draft_id}.json"))
    }

    fn read_draft(&self, path: &Path) -> Result<StoredDraft> {
        let contents = fs::read_to_string(path).map_err(|e| {
            DraftError::storage(&format!("failed to read {}", path.display()), &e)
        })?;
        serde_json::from_str(&contents)
            .map_err(|e| DraftError::Corrupt(format!("{}: {e}", path.display())))
    }
}

impl DraftStore for FsDraftRepository {
    fn save(
        &self,
        program_id: &ProgramId,
        name: &str,
        state: &AssignmentState,
    ) -> Result<DraftId> {
        let stored = StoredDraft::new(program_id.clone(), name, state.clone())?;
        let path = self.draft_path(&stored.id);
        let json = serde_json::to_string_pretty(&stored)
            .map_err(|e| DraftError::storage("failed to serialize draft", &e))?;
        fs::write(&path, json).map_err(|e| {
            DraftError::storage(&format!("failed to write {}", path.display()), &e)
        })?;
        info!(draft = %stored.id, program = %program_id, "draft saved");
        Ok(stored.id)
    }

    fn list(&self, program_id: &ProgramId) -> Result<Vec<DraftSummary>> {
        let entries = fs::read_dir(&self.base_dir).map_err(|e| {
            DraftError::storage(
                &format!("failed to read draft directory {}", self.base_dir.display()),
                &e,
            )
        })?;

        let mut summaries = Vec::new();
        for entry in entries {
            let entry = entry
                .map_err(|e| DraftError::storage("failed to read directory entry", &e))?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            // A foreign or unreadable file in the directory must not take
            // the whole listing down.
            match self.read_draft(&path) {
                Ok(stored) if &stored.program_id == program_id => {
                    summaries.push(DraftSummary {
                        id: stored.id,
                        name: stored.name,
                        updated_at: stored.saved_at,
                    });
                }
                Ok(_) => {}
                Err(err) => {
                    debug!(path = %path.display(), %err, "skipping unreadable draft file");
                }
            }
        }

        summaries.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(summaries)
    }

    fn load(&self, draft_id: &DraftId) -> Result<StoredDraft> {
        let path = self.draft_path(draft_id);
        if !path.exists() {
            return Err(DraftError::NotFound(draft_id.to_string()));
        }
        self.read_draft(&path)
    }

    fn delete(&self, draft_id: &DraftId) -> Result<()> {
        let path = self.draft_path(draft_id);
        if !path.exists() {
            return Err(DraftError::NotFound(draft_id.to_string()));
        }
        fs::remove_file(&path).map_err(|e| {
            DraftError::storage(&format!("failed to delete {}", path.display()), &e)
        })?;
        info!(draft = %draft_id, "draft deleted");
        Ok(())
    }
}
