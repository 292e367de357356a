//! Flattening a committed assignment state into export rows.

use chrono::{DateTime, SecondsFormat, Utc};

use rae_model::{AssignmentState, Roster};

/// One row of a finalized export: display names, not IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRecord {
    pub student: String,
    pub referent: String,
    pub program: String,
    pub assigned_at: DateTime<Utc>,
}

impl AssignmentRecord {
    /// Timestamp in the `2024-01-01T00:00:00Z` form used in export files.
    pub fn assigned_at_text(&self) -> String {
        self.assigned_at
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Flatten `state` into export rows, resolving names through `roster`.
///
/// Rows come out in the state's deterministic order (referent ID, then
/// assignment order). Entries referencing IDs missing from the roster are
/// skipped; the store sanitizes its state against the pool, so a mismatch
/// here means the caller passed a roster from another session.
pub fn flatten_assignments(
    state: &AssignmentState,
    roster: &Roster,
    program: &str,
    assigned_at: DateTime<Utc>,
) -> Vec<AssignmentRecord> {
    state
        .pairs()
        .filter_map(|(student_id, referent_id)| {
            let student = roster.student(student_id)?;
            let referent = roster.referent(referent_id)?;
            Some(AssignmentRecord {
                student: student.name.clone(),
                referent: referent.name.clone(),
                program: program.to_string(),
                assigned_at,
            })
        })
        .collect()
}

/// Download name for a program's CSV export; whitespace becomes `-`.
pub fn csv_file_name(program: &str) -> String {
    let cleaned = program.trim().split_whitespace().collect::<Vec<_>>().join("-");
    format!("assignments-{cleaned}.csv")
}
