//! The authoritative in-memory assignment store for a planning session.

use tracing::{debug, warn};

use rae_model::{AssignmentState, ReferentId, Roster, Student, StudentId};

use crate::error::{EngineError, Result};

/// Mutable assignment state validated against an immutable roster pool.
///
/// The store owns the single mutable resource of the engine. It validates
/// every reference against the session's roster; everything else
/// (workloads, history, persistence) is derived or layered on top by the
/// caller. Snapshots are deep, independent copies — mutating the store
/// never changes a snapshot already taken, and vice versa.
#[derive(Debug, Clone)]
pub struct AssignmentStore {
    roster: Roster,
    state: AssignmentState,
}

impl AssignmentStore {
    /// A store with an empty assignment state.
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            state: AssignmentState::new(),
        }
    }

    /// A store seeded from committed data. Entries referencing students or
    /// referents outside the roster are dropped rather than erroring, so a
    /// stale seed cannot wedge a new session.
    pub fn seeded(roster: Roster, seed: AssignmentState) -> Self {
        let mut store = Self::new(roster);
        store.state = store.sanitize(&seed);
        store
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn state(&self) -> &AssignmentState {
        &self.state
    }

    /// Error unless `student_id` is in the session pool.
    pub fn check_student(&self, student_id: &StudentId) -> Result<()> {
        if self.roster.contains_student(student_id) {
            Ok(())
        } else {
            Err(EngineError::UnknownStudent(student_id.clone()))
        }
    }

    /// Error unless `referent_id` is in the session pool.
    pub fn check_referent(&self, referent_id: &ReferentId) -> Result<()> {
        if self.roster.contains_referent(referent_id) {
            Ok(())
        } else {
            Err(EngineError::UnknownReferent(referent_id.clone()))
        }
    }

    /// Assign `student_id` to `referent_id`, removing any prior assignment
    /// first. Re-assigning to the current referent is a valid no-op.
    pub fn assign(&mut self, student_id: &StudentId, referent_id: &ReferentId) -> Result<()> {
        self.check_student(student_id)?;
        self.check_referent(referent_id)?;
        let previous = self.state.assign(student_id.clone(), referent_id);
        debug!(student = %student_id, referent = %referent_id, ?previous, "assigned");
        Ok(())
    }

    /// Remove `student_id` from whichever referent holds them. Returns the
    /// previous referent; `Ok(None)` if the student was already
    /// unassigned (idempotent).
    pub fn unassign(&mut self, student_id: &StudentId) -> Result<Option<ReferentId>> {
        self.check_student(student_id)?;
        Ok(self.state.remove(student_id))
    }

    /// Deep, independent copy of the current state.
    pub fn snapshot(&self) -> AssignmentState {
        self.state.clone()
    }

    /// Replace the current state wholesale (undo/redo, draft load).
    /// The snapshot is sanitized against the current pool so a draft saved
    /// under an older roster loads cleanly.
    pub fn restore(&mut self, snapshot: &AssignmentState) {
        self.state = self.sanitize(snapshot);
    }

    /// Accept a full reseed of pool and state, e.g. after externally-made
    /// changes arrive through the host's change feed.
    pub fn reseed(&mut self, roster: Roster, state: AssignmentState) {
        self.roster = roster;
        self.state = self.sanitize(&state);
    }

    /// Students in the pool with no current assignment, in ID order.
    pub fn unassigned_students(&self) -> Vec<&Student> {
        self.roster
            .students()
            .filter(|student| !self.state.is_assigned(&student.id))
            .collect()
    }

    pub(crate) fn sanitize(&self, state: &AssignmentState) -> AssignmentState {
        let mut dropped = 0usize;
        let sanitized = AssignmentState::from_assignments(state.iter().filter_map(
            |(referent_id, students)| {
                if !self.roster.contains_referent(referent_id) {
                    dropped += students.len();
                    return None;
                }
                let (known, unknown): (Vec<StudentId>, Vec<StudentId>) = students
                    .iter()
                    .cloned()
                    .partition(|s| self.roster.contains_student(s));
                dropped += unknown.len();
                Some((referent_id.clone(), known))
            },
        ));
        if dropped > 0 {
            warn!(dropped, "dropped assignments referencing ids outside the pool");
        }
        sanitized
    }
}
