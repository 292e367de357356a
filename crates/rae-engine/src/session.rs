//! Session-scoped controller tying the store and its undo history
//! together.
//!
//! One `PlanningSession` exists per active planning session and owns one
//! [`AssignmentStore`] and one [`CommandHistory`] — never a process-wide
//! singleton, so histories cannot bleed across sessions and the whole
//! thing is trivially testable. Every mutating entry point validates its
//! inputs first, records the post-mutation snapshot in the history, and
//! only then applies it to the live store; a failed validation therefore
//! leaves both store and history untouched.

use std::collections::BTreeMap;

use tracing::{debug, info};

use rae_model::{
    AssignmentState, Referent, ReferentId, Roster, Student, StudentId, Workload,
};

use crate::error::Result;
use crate::history::CommandHistory;
use crate::planner::{MatchPlan, plan_auto_assignment};
use crate::score::score_all;
use crate::store::AssignmentStore;
use crate::workload::compute_workloads;

/// A planning session over one roster: reversible manual edits,
/// auto-assign, and reseed.
#[derive(Debug, Clone)]
pub struct PlanningSession {
    store: AssignmentStore,
    history: CommandHistory<AssignmentState>,
}

impl PlanningSession {
    /// A fresh session with an empty assignment state.
    pub fn new(roster: Roster) -> Self {
        Self::seeded(roster, AssignmentState::new())
    }

    /// A session seeded from committed data; the seed becomes the
    /// history's initial entry, so undoing everything returns to it.
    pub fn seeded(roster: Roster, seed: AssignmentState) -> Self {
        let store = AssignmentStore::seeded(roster, seed);
        let history = CommandHistory::new(store.snapshot());
        Self { store, history }
    }

    pub fn roster(&self) -> &Roster {
        self.store.roster()
    }

    pub fn state(&self) -> &AssignmentState {
        self.store.state()
    }

    pub fn store(&self) -> &AssignmentStore {
        &self.store
    }

    /// Manually assign a student (drag-and-drop). May overload the target
    /// referent — that is an allowed explicit override, surfaced through
    /// the workload flags rather than an error.
    pub fn assign(&mut self, student_id: &StudentId, referent_id: &ReferentId) -> Result<()> {
        self.store.check_student(student_id)?;
        self.store.check_referent(referent_id)?;

        let mut next = self.store.snapshot();
        next.assign(student_id.clone(), referent_id);
        self.commit(next);
        Ok(())
    }

    /// Manually unassign a student; idempotent for a known student with
    /// no current assignment.
    pub fn unassign(&mut self, student_id: &StudentId) -> Result<()> {
        self.store.check_student(student_id)?;

        let mut next = self.store.snapshot();
        next.remove(student_id);
        self.commit(next);
        Ok(())
    }

    /// Plan assignments for every currently unassigned student and apply
    /// the accepted ones as a single reversible step.
    pub fn auto_assign(&mut self) -> MatchPlan {
        let referents: Vec<&Referent> = self.store.roster().referents().collect();
        let unassigned: Vec<&Student> = self.store.unassigned_students();
        let plan = plan_auto_assignment(&unassigned, &referents, self.store.state());

        if !plan.assignments.is_empty() {
            let mut next = self.store.snapshot();
            for planned in &plan.assignments {
                next.assign(planned.student_id.clone(), &planned.referent_id);
            }
            self.commit(next);
        }
        info!(
            assigned = plan.assignments.len(),
            unresolved = plan.unresolved.len(),
            "auto-assign applied"
        );
        plan
    }

    /// Step back one user action. Returns false at the seed (no-op; the
    /// live state is untouched).
    pub fn undo(&mut self) -> bool {
        match self.history.undo().cloned() {
            Some(previous) => {
                self.store.restore(&previous);
                true
            }
            None => false,
        }
    }

    /// Step forward one undone action. Returns false at the tail.
    pub fn redo(&mut self) -> bool {
        match self.history.redo().cloned() {
            Some(next) => {
                self.store.restore(&next);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Accept a full reseed of pool and state (externally-made changes).
    /// History is cleared to the new seed — edits made against the old
    /// pool are not replayable against the new one.
    pub fn reseed(&mut self, roster: Roster, state: AssignmentState) {
        self.store.reseed(roster, state);
        self.history.clear(self.store.snapshot());
        info!("session reseeded");
    }

    /// Restore a loaded draft as a reversible step, so loading a draft
    /// can itself be undone. Entries referencing IDs outside the current
    /// pool are dropped, as on reseed.
    pub fn restore_draft(&mut self, state: &AssignmentState) {
        let next = self.store.sanitize(state);
        self.commit(next);
    }

    /// Current per-referent workloads, recomputed from the live state.
    pub fn workloads(&self) -> BTreeMap<ReferentId, Workload> {
        compute_workloads(self.store.roster().referents(), self.store.state())
    }

    /// Full compatibility matrix for the matrix view.
    pub fn score_matrix(&self) -> BTreeMap<StudentId, BTreeMap<ReferentId, u32>> {
        let referents: Vec<&Referent> = self.store.roster().referents().collect();
        score_all(self.store.roster().students(), referents.iter().copied())
    }

    /// Record `next` in the history, then make it live. A mutation that
    /// changes nothing is dropped so undo steps always correspond to
    /// visible changes.
    fn commit(&mut self, next: AssignmentState) {
        if &next == self.store.state() {
            debug!("mutation was a no-op, not recorded");
            return;
        }
        // History is updated before the live store.
        self.history.push_state(next.clone());
        self.store.restore(&next);
    }
}
