//! Tests for rae-model types.

use rae_model::{
    AssignmentState, Expertise, Referent, ReferentId, Roster, Student, StudentId, Workload,
};

fn sid(s: &str) -> StudentId {
    StudentId::new(s).unwrap()
}

fn rid(s: &str) -> ReferentId {
    ReferentId::new(s).unwrap()
}

#[test]
fn student_deserializes_from_sparse_payload() {
    let json = r#"{"id": "s1", "name": "Mina"}"#;
    let student: Student = serde_json::from_str(json).expect("deserialize student");

    assert_eq!(student.id, sid("s1"));
    assert!(student.project_domain.is_none());
    assert!(student.availability.is_empty());
    assert!(student.prior_referents.is_empty());
}

#[test]
fn referent_expertise_roundtrips() {
    let mut expertise = Expertise::default();
    expertise.domains.insert("fintech".to_string());
    expertise.domains.insert("saas".to_string());
    expertise.languages.insert("en".to_string());

    let referent = Referent {
        expertise,
        ..Referent::new(rid("r1"), "Ada")
    };

    let json = serde_json::to_string(&referent).expect("serialize referent");
    let round: Referent = serde_json::from_str(&json).expect("deserialize referent");
    assert_eq!(round, referent);
    assert_eq!(round.max_students, 10);
}

#[test]
fn roster_lookups() {
    let roster = Roster::new(
        vec![Student::new(sid("s1"), "Mina")],
        vec![Referent::new(rid("r1"), "Ada").with_max_students(3)],
    )
    .unwrap();

    assert!(roster.contains_student(&sid("s1")));
    assert!(!roster.contains_student(&sid("s2")));
    assert_eq!(roster.referent(&rid("r1")).unwrap().max_students, 3);
    assert_eq!(roster.student_count(), 1);
    assert_eq!(roster.referent_count(), 1);
}

#[test]
fn assignment_pairs_are_deterministic() {
    let mut state = AssignmentState::new();
    state.assign(sid("s2"), &rid("r2"));
    state.assign(sid("s1"), &rid("r1"));
    state.assign(sid("s3"), &rid("r1"));

    let pairs: Vec<(String, String)> = state
        .pairs()
        .map(|(s, r)| (s.as_str().to_string(), r.as_str().to_string()))
        .collect();

    // Referents in ID order, students in assignment order within each.
    assert_eq!(
        pairs,
        vec![
            ("s1".to_string(), "r1".to_string()),
            ("s3".to_string(), "r1".to_string()),
            ("s2".to_string(), "r2".to_string()),
        ]
    );
}

#[test]
fn workload_percentage_is_exact_at_bounds() {
    let w = Workload::new(4, 5);
    assert_eq!(w.capacity_percentage, 80.0);
    assert!(w.is_at_capacity);
    assert!(!w.is_overloaded);

    let w = Workload::new(5, 5);
    assert_eq!(w.capacity_percentage, 100.0);
    assert!(w.is_overloaded);
}
