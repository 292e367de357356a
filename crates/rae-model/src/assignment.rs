//! Assignment state: the referent → students mapping a session plans over.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::{ReferentId, StudentId};

/// The authoritative mapping of referents to their assigned students for
/// one planning session.
///
/// A student appears under at most one referent at any time; the raw
/// mutators here preserve that invariant by always removing a student
/// before inserting them elsewhere. Ordering is deterministic: referents
/// are keyed in a `BTreeMap` and each referent's students keep assignment
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentState {
    assignments: BTreeMap<ReferentId, Vec<StudentId>>,
}

impl AssignmentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from committed data, deduplicating so the at-most-one-referent
    /// invariant holds even for inconsistent input: a student listed under
    /// several referents keeps the first (lowest referent ID) occurrence.
    pub fn from_assignments(
        assignments: impl IntoIterator<Item = (ReferentId, Vec<StudentId>)>,
    ) -> Self {
        let mut state = Self::new();
        let merged: BTreeMap<ReferentId, Vec<StudentId>> = assignments.into_iter().collect();
        for (referent_id, students) in merged {
            for student_id in students {
                if state.referent_of(&student_id).is_none() {
                    state.push(&referent_id, student_id);
                }
            }
        }
        state
    }

    /// The referent currently holding `student_id`, if any.
    pub fn referent_of(&self, student_id: &StudentId) -> Option<&ReferentId> {
        self.assignments
            .iter()
            .find(|(_, students)| students.contains(student_id))
            .map(|(referent_id, _)| referent_id)
    }

    /// Students assigned to `referent_id`, in assignment order.
    pub fn students_of(&self, referent_id: &ReferentId) -> &[StudentId] {
        self.assignments
            .get(referent_id)
            .map_or(&[], Vec::as_slice)
    }

    pub fn assigned_count(&self, referent_id: &ReferentId) -> usize {
        self.students_of(referent_id).len()
    }

    pub fn is_assigned(&self, student_id: &StudentId) -> bool {
        self.referent_of(student_id).is_some()
    }

    /// Move `student_id` under `referent_id`, removing any prior holder.
    ///
    /// Returns the previous referent if the student moved. Re-assigning to
    /// the current referent is a no-op that keeps list position.
    pub fn assign(&mut self, student_id: StudentId, referent_id: &ReferentId) -> Option<ReferentId> {
        if self.referent_of(&student_id) == Some(referent_id) {
            return None;
        }
        let previous = self.remove(&student_id);
        self.push(referent_id, student_id);
        previous
    }

    /// Remove `student_id` from whichever referent holds them.
    ///
    /// Returns the referent the student was removed from; `None` if the
    /// student was already unassigned.
    pub fn remove(&mut self, student_id: &StudentId) -> Option<ReferentId> {
        let holder = self.referent_of(student_id).cloned()?;
        if let Some(students) = self.assignments.get_mut(&holder) {
            students.retain(|s| s != student_id);
            if students.is_empty() {
                self.assignments.remove(&holder);
            }
        }
        Some(holder)
    }

    /// All (referent, students) pairs, referents in ID order.
    pub fn iter(&self) -> impl Iterator<Item = (&ReferentId, &[StudentId])> {
        self.assignments
            .iter()
            .map(|(referent_id, students)| (referent_id, students.as_slice()))
    }

    /// Flat (student, referent) pairs, referents in ID order then
    /// assignment order within a referent.
    pub fn pairs(&self) -> impl Iterator<Item = (&StudentId, &ReferentId)> {
        self.assignments.iter().flat_map(|(referent_id, students)| {
            students.iter().map(move |student_id| (student_id, referent_id))
        })
    }

    /// Total number of assigned students.
    pub fn assigned_total(&self) -> usize {
        self.assignments.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    fn push(&mut self, referent_id: &ReferentId, student_id: StudentId) {
        self.assignments
            .entry(referent_id.clone())
            .or_default()
            .push(student_id);
    }
}
