//! Property-based tests for the engine's core guarantees.

use std::collections::BTreeSet;

use proptest::prelude::*;

use rae_engine::{AssignmentStore, PlanningSession, plan_auto_assignment, score_all};
use rae_model::{AssignmentState, Expertise, Referent, ReferentId, Roster, Student, StudentId};

const STUDENT_POOL: usize = 8;
const REFERENT_POOL: usize = 4;

fn sid(i: usize) -> StudentId {
    StudentId::new(format!("s{i}")).unwrap()
}

fn rid(i: usize) -> ReferentId {
    ReferentId::new(format!("r{i}")).unwrap()
}

fn roster(referent_caps: &[u32]) -> Roster {
    let domains = ["fintech", "saas", "health", "climate"];
    let languages = ["en", "fr", "de"];

    let students = (0..STUDENT_POOL)
        .map(|i| {
            let mut s = Student::new(sid(i), format!("Student {i}"));
            s.project_domain = Some(domains[i % domains.len()].to_string());
            s.language = Some(languages[i % languages.len()].to_string());
            s.availability = vec![format!("slot-{}", i % 3)];
            s
        })
        .collect();

    let referents = referent_caps
        .iter()
        .enumerate()
        .map(|(i, &cap)| {
            let mut expertise = Expertise::default();
            expertise.domains.insert(domains[i % domains.len()].to_string());
            expertise
                .languages
                .insert(languages[i % languages.len()].to_string());
            Referent {
                expertise,
                availability: vec![format!("slot-{}", i % 3)],
                ..Referent::new(rid(i), format!("Referent {i}")).with_max_students(cap)
            }
        })
        .collect();

    Roster::new(students, referents).unwrap()
}

/// A random assign/unassign operation over the fixed pools.
#[derive(Debug, Clone)]
enum Op {
    Assign(usize, usize),
    Unassign(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..STUDENT_POOL, 0..REFERENT_POOL).prop_map(|(s, r)| Op::Assign(s, r)),
        (0..STUDENT_POOL).prop_map(Op::Unassign),
    ]
}

fn caps_strategy() -> impl Strategy<Value = Vec<u32>> {
    proptest::collection::vec(1..4u32, REFERENT_POOL)
}

/// Every student appears under at most one referent.
fn assert_no_double_assignment(state: &AssignmentState) {
    let mut seen = BTreeSet::new();
    for (student_id, _) in state.pairs() {
        assert!(
            seen.insert(student_id.clone()),
            "student {student_id} assigned twice"
        );
    }
}

proptest! {
    #[test]
    fn no_double_assignment_under_any_op_sequence(
        ops in proptest::collection::vec(op_strategy(), 0..40),
    ) {
        let mut store = AssignmentStore::new(roster(&[2, 2, 2, 2]));
        for op in ops {
            match op {
                Op::Assign(s, r) => store.assign(&sid(s), &rid(r)).unwrap(),
                Op::Unassign(s) => {
                    store.unassign(&sid(s)).unwrap();
                }
            }
            assert_no_double_assignment(store.state());
        }
    }

    #[test]
    fn planner_respects_capacity(
        caps in caps_strategy(),
        preassigned in proptest::collection::btree_set(0..STUDENT_POOL, 0..4),
    ) {
        let roster = roster(&caps);
        let mut current = AssignmentState::new();
        for (slot, s) in preassigned.iter().enumerate() {
            // Spread pre-assignments over referents, overloads included.
            current.assign(sid(*s), &rid(slot % REFERENT_POOL));
        }

        let referents: Vec<&Referent> = roster.referents().collect();
        let unassigned: Vec<&Student> = roster
            .students()
            .filter(|s| !current.is_assigned(&s.id))
            .collect();
        let plan = plan_auto_assignment(&unassigned, &referents, &current);

        let mut projected = current.clone();
        for planned in &plan.assignments {
            projected.assign(planned.student_id.clone(), &planned.referent_id);
        }
        for referent in &referents {
            let before = current.assigned_count(&referent.id);
            let after = projected.assigned_count(&referent.id);
            // The planner may not push anyone past max_students; referents
            // already over the limit receive nothing.
            prop_assert!(
                after <= (referent.max_students as usize).max(before),
                "planner overloaded {}",
                referent.id
            );
        }

        // Everyone is either placed or unresolved, exactly once.
        let placed: BTreeSet<_> = plan
            .assignments
            .iter()
            .map(|a| a.student_id.clone())
            .collect();
        prop_assert_eq!(placed.len(), plan.assignments.len());
        for s in &unassigned {
            prop_assert!(
                placed.contains(&s.id) != plan.unresolved.contains(&s.id),
                "student {} neither placed nor unresolved",
                s.id
            );
        }
    }

    #[test]
    fn scoring_and_planning_are_deterministic(caps in caps_strategy()) {
        let roster = roster(&caps);
        let students: Vec<Student> = roster.students().cloned().collect();
        let referents: Vec<Referent> = roster.referents().cloned().collect();

        let first = score_all(students.iter(), referents.iter());
        let second = score_all(students.iter(), referents.iter());
        prop_assert_eq!(first, second);

        let student_refs: Vec<&Student> = students.iter().collect();
        let referent_refs: Vec<&Referent> = referents.iter().collect();
        let state = AssignmentState::new();
        let plan_a = plan_auto_assignment(&student_refs, &referent_refs, &state);
        let plan_b = plan_auto_assignment(&student_refs, &referent_refs, &state);
        prop_assert_eq!(plan_a, plan_b);
    }

    #[test]
    fn undo_all_returns_to_seed_and_redo_restores(
        ops in proptest::collection::vec(op_strategy(), 1..20),
    ) {
        let mut session = PlanningSession::new(roster(&[3, 3, 3, 3]));
        let seed = session.state().clone();

        let mut steps = 0usize;
        for op in ops {
            let before = session.state().clone();
            match op {
                Op::Assign(s, r) => session.assign(&sid(s), &rid(r)).unwrap(),
                Op::Unassign(s) => session.unassign(&sid(s)).unwrap(),
            }
            if session.state() != &before {
                steps += 1;
            }
        }
        let final_state = session.state().clone();

        for _ in 0..steps {
            prop_assert!(session.undo());
        }
        prop_assert_eq!(session.state(), &seed);
        prop_assert!(!session.can_undo());

        for _ in 0..steps {
            prop_assert!(session.redo());
        }
        prop_assert_eq!(session.state(), &final_state);
        prop_assert!(!session.can_redo());
    }

    #[test]
    fn unassign_is_idempotent(s in 0..STUDENT_POOL, r in 0..REFERENT_POOL) {
        let mut store = AssignmentStore::new(roster(&[2, 2, 2, 2]));
        store.assign(&sid(s), &rid(r)).unwrap();

        store.unassign(&sid(s)).unwrap();
        let after_first = store.state().clone();
        store.unassign(&sid(s)).unwrap();
        prop_assert_eq!(store.state(), &after_first);
    }
}
