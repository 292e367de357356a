//! Roster inputs for a planning session.
//!
//! Students and referents are supplied by the external roster provider and
//! are immutable for the duration of a session. The [`Roster`] bundles both
//! pools behind ID lookups so the store and planner can validate references
//! without touching the provider again.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::ids::{ReferentId, StudentId};

/// Default referent capacity when the roster record carries none.
pub const DEFAULT_MAX_STUDENTS: u32 = 10;

const fn default_max_students() -> u32 {
    DEFAULT_MAX_STUDENTS
}

/// A student awaiting or holding a referent assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    /// Contact address, display-only.
    #[serde(default)]
    pub contact: Option<String>,
    /// Free-text project domain from the student's metadata bag.
    #[serde(default)]
    pub project_domain: Option<String>,
    /// Preferred working language.
    #[serde(default)]
    pub language: Option<String>,
    /// Availability slots (e.g. "mon-am", "thu-pm"); free-form tokens
    /// matched exactly against referent availability.
    #[serde(default)]
    pub availability: Vec<String>,
    /// Referents this student has worked with before.
    #[serde(default)]
    pub prior_referents: Vec<ReferentId>,
}

impl Student {
    /// Minimal constructor for tests and callers that fill metadata later.
    pub fn new(id: StudentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            contact: None,
            project_domain: None,
            language: None,
            availability: Vec::new(),
            prior_referents: Vec::new(),
        }
    }
}

/// What a referent can coach: domains and languages, as sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expertise {
    #[serde(default)]
    pub domains: BTreeSet<String>,
    #[serde(default)]
    pub languages: BTreeSet<String>,
}

/// A coach who can be assigned a bounded number of students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referent {
    pub id: ReferentId,
    pub name: String,
    #[serde(default)]
    pub expertise: Expertise,
    #[serde(default)]
    pub availability: Vec<String>,
    /// Capacity limit; absent in the provider payload means 10.
    #[serde(default = "default_max_students")]
    pub max_students: u32,
}

impl Referent {
    pub fn new(id: ReferentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            expertise: Expertise::default(),
            availability: Vec::new(),
            max_students: DEFAULT_MAX_STUDENTS,
        }
    }

    pub fn with_max_students(mut self, max_students: u32) -> Self {
        self.max_students = max_students;
        self
    }
}

/// Immutable student/referent pools for one planning session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    students: BTreeMap<StudentId, Student>,
    referents: BTreeMap<ReferentId, Referent>,
}

impl Roster {
    /// Build a roster from provider records, rejecting duplicate IDs.
    pub fn new(students: Vec<Student>, referents: Vec<Referent>) -> Result<Self, ModelError> {
        let mut student_map = BTreeMap::new();
        for student in students {
            let id = student.id.clone();
            if student_map.insert(id.clone(), student).is_some() {
                return Err(ModelError::DuplicateStudent(id.as_str().to_string()));
            }
        }

        let mut referent_map = BTreeMap::new();
        for referent in referents {
            let id = referent.id.clone();
            if referent_map.insert(id.clone(), referent).is_some() {
                return Err(ModelError::DuplicateReferent(id.as_str().to_string()));
            }
        }

        Ok(Self {
            students: student_map,
            referents: referent_map,
        })
    }

    pub fn student(&self, id: &StudentId) -> Option<&Student> {
        self.students.get(id)
    }

    pub fn referent(&self, id: &ReferentId) -> Option<&Referent> {
        self.referents.get(id)
    }

    pub fn contains_student(&self, id: &StudentId) -> bool {
        self.students.contains_key(id)
    }

    pub fn contains_referent(&self, id: &ReferentId) -> bool {
        self.referents.contains_key(id)
    }

    /// Students in deterministic (ID) order.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    /// Referents in deterministic (ID) order.
    pub fn referents(&self) -> impl Iterator<Item = &Referent> {
        self.referents.values()
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn referent_count(&self) -> usize {
        self.referents.len()
    }
}
