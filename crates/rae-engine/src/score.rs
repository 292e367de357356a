//! Pairwise student/referent compatibility scoring.
//!
//! The score is a weighted blend of four independent components, each
//! normalized to 0–100 before weighting. Weights are fixed and sum to 100:
//!
//! | Component    | Weight | Signal                                        |
//! |--------------|--------|-----------------------------------------------|
//! | Domain       | 40     | project domain vs. referent expertise domains |
//! | Language     | 25     | working language vs. referent languages       |
//! | Availability | 20     | overlap of availability slots                 |
//! | History      | 15     | student has worked with this referent before  |
//!
//! Free-text domains are matched with Jaro-Winkler similarity (an exact
//! case-insensitive hit scores 100); languages and availability tokens
//! match exactly after normalization. Missing or empty fields contribute 0,
//! never an error. Everything here is pure and deterministic.

use std::collections::BTreeMap;

use rapidfuzz::distance::jaro_winkler;
use serde::{Deserialize, Serialize};

use rae_model::{Referent, ReferentId, Student, StudentId};

/// Weight of the project-domain component.
pub const DOMAIN_WEIGHT: u32 = 40;
/// Weight of the language component.
pub const LANGUAGE_WEIGHT: u32 = 25;
/// Weight of the availability-overlap component.
pub const AVAILABILITY_WEIGHT: u32 = 20;
/// Weight of the prior-history component.
pub const HISTORY_WEIGHT: u32 = 15;

/// Per-component breakdown of a compatibility score, for explainability
/// in the matrix view. Component values are the normalized 0–100
/// sub-scores before weighting; `total` is the final weighted score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub domain: u32,
    pub language: u32,
    pub availability: u32,
    pub history: u32,
    pub total: u32,
}

impl ScoreBreakdown {
    /// Human-readable explanation of the component values.
    pub fn explain(&self) -> String {
        format!(
            "domain: {}%; language: {}%; availability: {}%; history: {}%",
            self.domain, self.language, self.availability, self.history
        )
    }
}

/// Compatibility score in `[0, 100]` for one student/referent pair.
pub fn score(student: &Student, referent: &Referent) -> u32 {
    score_detailed(student, referent).total
}

/// Full component breakdown for one student/referent pair.
pub fn score_detailed(student: &Student, referent: &Referent) -> ScoreBreakdown {
    let domain = domain_score(student, referent);
    let language = language_score(student, referent);
    let availability = availability_score(student, referent);
    let history = history_score(student, referent);

    let weighted = f64::from(
        domain * DOMAIN_WEIGHT
            + language * LANGUAGE_WEIGHT
            + availability * AVAILABILITY_WEIGHT
            + history * HISTORY_WEIGHT,
    ) / 100.0;

    ScoreBreakdown {
        domain,
        language,
        availability,
        history,
        // Round rather than truncate to avoid a visible bias toward
        // lower scores.
        total: weighted.round() as u32,
    }
}

/// Batch form for the matrix view: every student against every referent.
pub fn score_all<'a>(
    students: impl IntoIterator<Item = &'a Student>,
    referents: impl IntoIterator<Item = &'a Referent> + Clone,
) -> BTreeMap<StudentId, BTreeMap<ReferentId, u32>> {
    let mut matrix = BTreeMap::new();
    for student in students {
        let row: BTreeMap<ReferentId, u32> = referents
            .clone()
            .into_iter()
            .map(|referent| (referent.id.clone(), score(student, referent)))
            .collect();
        matrix.insert(student.id.clone(), row);
    }
    matrix
}

fn domain_score(student: &Student, referent: &Referent) -> u32 {
    let Some(project_domain) = normalized(student.project_domain.as_deref()) else {
        return 0;
    };
    if referent.expertise.domains.is_empty() {
        return 0;
    }

    let mut best = 0.0f64;
    for expertise_domain in &referent.expertise.domains {
        let Some(expertise_domain) = normalized(Some(expertise_domain.as_str())) else {
            continue;
        };
        if expertise_domain == project_domain {
            return 100;
        }
        let similarity =
            jaro_winkler::similarity(project_domain.chars(), expertise_domain.chars());
        if similarity > best {
            best = similarity;
        }
    }
    (best * 100.0).round() as u32
}

fn language_score(student: &Student, referent: &Referent) -> u32 {
    let Some(language) = normalized(student.language.as_deref()) else {
        return 0;
    };
    let spoken = referent
        .expertise
        .languages
        .iter()
        .filter_map(|l| normalized(Some(l.as_str())))
        .any(|l| l == language);
    if spoken { 100 } else { 0 }
}

fn availability_score(student: &Student, referent: &Referent) -> u32 {
    let student_slots: Vec<String> = student
        .availability
        .iter()
        .filter_map(|s| normalized(Some(s.as_str())))
        .collect();
    if student_slots.is_empty() || referent.availability.is_empty() {
        return 0;
    }

    let referent_slots: Vec<String> = referent
        .availability
        .iter()
        .filter_map(|s| normalized(Some(s.as_str())))
        .collect();
    let overlap = student_slots
        .iter()
        .filter(|slot| referent_slots.contains(slot))
        .count();

    (overlap as f64 / student_slots.len() as f64 * 100.0).round() as u32
}

fn history_score(student: &Student, referent: &Referent) -> u32 {
    if student.prior_referents.contains(&referent.id) {
        100
    } else {
        0
    }
}

/// Trim + lowercase; `None` for missing or blank input.
fn normalized(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
