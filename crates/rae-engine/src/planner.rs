//! Greedy capacity-bounded auto-assignment.
//!
//! The planner proposes an assignment for every unassigned student,
//! highest compatibility first, without ever pushing a referent past its
//! `max_students` limit. It is deliberately a greedy heuristic rather than
//! a maximum-weight bipartite matching (no Hungarian/assignment solver):
//! O(n·m log(n·m)) and each acceptance has a one-line explanation — "this
//! was the candidate's best available referent at assignment time" —
//! at the cost of global optimality.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use rae_model::{AssignmentState, Referent, ReferentId, Student, StudentId};

use crate::score::score;
use crate::workload::compute_workloads;

/// One proposed assignment, with its score for explainability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedAssignment {
    pub student_id: StudentId,
    pub referent_id: ReferentId,
    pub score: u32,
}

/// Result of an auto-assign pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchPlan {
    /// Accepted assignments in acceptance order (highest score first).
    pub assignments: Vec<PlannedAssignment>,
    /// Students left without a referent because every referent ran out of
    /// capacity.
    pub unresolved: Vec<StudentId>,
}

struct Candidate {
    student_id: StudentId,
    referent_id: ReferentId,
    score: u32,
    /// Referent's open seats at planning start, for tie-breaking.
    initial_remaining: u32,
}

/// Propose an assignment for every unassigned student.
///
/// Candidates are ordered by score descending, then referent remaining
/// capacity descending, then referent ID, then student ID — a total order,
/// so identical inputs always produce identical plans. Only referents
/// strictly below capacity are considered; the planner never proposes an
/// overload (manual drag-and-drop may, the planner must not).
pub fn plan_auto_assignment(
    unassigned_students: &[&Student],
    referents: &[&Referent],
    current: &AssignmentState,
) -> MatchPlan {
    plan_auto_assignment_with(unassigned_students, referents, current, score)
}

/// [`plan_auto_assignment`] with an injected pairwise scorer.
///
/// Lets callers plan against a custom or precomputed score table; the
/// scorer must be deterministic for the plan to be.
pub fn plan_auto_assignment_with(
    unassigned_students: &[&Student],
    referents: &[&Referent],
    current: &AssignmentState,
    scorer: impl Fn(&Student, &Referent) -> u32,
) -> MatchPlan {
    let workloads = compute_workloads(referents.iter().copied(), current);

    let mut candidates = Vec::new();
    for student in unassigned_students.iter().copied() {
        if current.is_assigned(&student.id) {
            // The caller passed a stale list; planning only covers
            // unassigned students.
            debug!(student = %student.id, "skipping already-assigned student");
            continue;
        }
        for referent in referents.iter().copied() {
            let workload = &workloads[&referent.id];
            if !workload.has_room() {
                continue;
            }
            candidates.push(Candidate {
                student_id: student.id.clone(),
                referent_id: referent.id.clone(),
                score: scorer(student, referent),
                initial_remaining: workload.remaining(),
            });
        }
    }

    candidates.sort_by(candidate_order);

    let mut remaining: BTreeMap<ReferentId, u32> = workloads
        .iter()
        .map(|(id, w)| (id.clone(), w.remaining()))
        .collect();
    let mut placed: BTreeSet<StudentId> = BTreeSet::new();
    let mut assignments = Vec::new();

    for candidate in candidates {
        if placed.contains(&candidate.student_id) {
            continue;
        }
        let Some(seats) = remaining.get_mut(&candidate.referent_id) else {
            continue;
        };
        if *seats == 0 {
            continue;
        }
        *seats -= 1;
        placed.insert(candidate.student_id.clone());
        debug!(
            student = %candidate.student_id,
            referent = %candidate.referent_id,
            score = candidate.score,
            "planned assignment"
        );
        assignments.push(PlannedAssignment {
            student_id: candidate.student_id,
            referent_id: candidate.referent_id,
            score: candidate.score,
        });
    }

    let unresolved: Vec<StudentId> = unassigned_students
        .iter()
        .filter(|s| !current.is_assigned(&s.id) && !placed.contains(&s.id))
        .map(|s| s.id.clone())
        .collect();
    if !unresolved.is_empty() {
        warn!(count = unresolved.len(), "students left unresolved by auto-assign");
    }

    MatchPlan {
        assignments,
        unresolved,
    }
}

/// Total candidate order: score descending, initial remaining capacity
/// descending, then referent and student IDs ascending.
fn candidate_order(a: &Candidate, b: &Candidate) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.initial_remaining.cmp(&a.initial_remaining))
        .then_with(|| a.referent_id.cmp(&b.referent_id))
        .then_with(|| a.student_id.cmp(&b.student_id))
}
