#![deny(unsafe_code)]

pub mod assignment;
pub mod error;
pub mod ids;
pub mod roster;
pub mod workload;

pub use assignment::AssignmentState;
pub use error::{ModelError, Result};
pub use ids::{ProgramId, ReferentId, StudentId};
pub use roster::{DEFAULT_MAX_STUDENTS, Expertise, Referent, Roster, Student};
pub use workload::{AT_CAPACITY_PERCENTAGE, OVERLOAD_PERCENTAGE, Workload};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_rejects_duplicate_ids() {
        let s1 = Student::new(StudentId::new("s1").unwrap(), "One");
        let s1_again = Student::new(StudentId::new("s1").unwrap(), "One again");

        let err = Roster::new(vec![s1, s1_again], vec![]).unwrap_err();
        assert_eq!(err, ModelError::DuplicateStudent("s1".to_string()));
    }

    #[test]
    fn referent_capacity_defaults_when_absent() {
        let json = r#"{"id": "r1", "name": "Ada"}"#;
        let referent: Referent = serde_json::from_str(json).expect("deserialize referent");
        assert_eq!(referent.max_students, DEFAULT_MAX_STUDENTS);
        assert!(referent.expertise.domains.is_empty());
    }

    #[test]
    fn assignment_state_serde_roundtrip() {
        let mut state = AssignmentState::new();
        state.assign(
            StudentId::new("s1").unwrap(),
            &ReferentId::new("r1").unwrap(),
        );

        let json = serde_json::to_string(&state).expect("serialize state");
        let round: AssignmentState = serde_json::from_str(&json).expect("deserialize state");
        assert_eq!(round, state);
    }
}
