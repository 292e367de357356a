//! Tests for compatibility scoring.

use rae_engine::{score, score_all, score_detailed};
use rae_model::{Expertise, Referent, ReferentId, Student, StudentId};

fn sid(s: &str) -> StudentId {
    StudentId::new(s).unwrap()
}

fn rid(s: &str) -> ReferentId {
    ReferentId::new(s).unwrap()
}

fn student(id: &str) -> Student {
    Student::new(sid(id), format!("Student {id}"))
}

fn referent(id: &str, domains: &[&str], languages: &[&str], availability: &[&str]) -> Referent {
    let mut expertise = Expertise::default();
    for d in domains {
        expertise.domains.insert((*d).to_string());
    }
    for l in languages {
        expertise.languages.insert((*l).to_string());
    }
    Referent {
        expertise,
        availability: availability.iter().map(|s| (*s).to_string()).collect(),
        ..Referent::new(rid(id), format!("Referent {id}"))
    }
}

#[test]
fn perfect_match_scores_one_hundred() {
    let mut s = student("s1");
    s.project_domain = Some("FinTech".to_string());
    s.language = Some("en".to_string());
    s.availability = vec!["mon-am".to_string(), "thu-pm".to_string()];
    s.prior_referents = vec![rid("r1")];

    let r = referent("r1", &["fintech"], &["en"], &["mon-am", "thu-pm", "fri-am"]);

    let breakdown = score_detailed(&s, &r);
    assert_eq!(breakdown.domain, 100);
    assert_eq!(breakdown.language, 100);
    assert_eq!(breakdown.availability, 100);
    assert_eq!(breakdown.history, 100);
    assert_eq!(breakdown.total, 100);
}

#[test]
fn missing_metadata_contributes_zero_without_error() {
    let s = student("s1");
    let r = referent("r1", &[], &[], &[]);

    assert_eq!(score(&s, &r), 0);

    // One-sided data still degrades to zero for the empty side.
    let mut s = student("s2");
    s.project_domain = Some("saas".to_string());
    let breakdown = score_detailed(&s, &r);
    assert_eq!(breakdown.domain, 0);
    assert_eq!(breakdown.total, 0);
}

#[test]
fn weighted_total_rounds_instead_of_truncating() {
    // language 100 (weight 25) + availability 33 (weight 20):
    // (2500 + 660) / 100 = 31.6 -> 32, not 31.
    let mut s = student("s1");
    s.language = Some("fr".to_string());
    s.availability = vec![
        "mon-am".to_string(),
        "tue-am".to_string(),
        "wed-am".to_string(),
    ];

    let r = referent("r1", &[], &["fr"], &["mon-am"]);

    let breakdown = score_detailed(&s, &r);
    assert_eq!(breakdown.availability, 33);
    assert_eq!(breakdown.total, 32);
}

#[test]
fn fuzzy_domain_match_scores_between_zero_and_exact() {
    let mut s = student("s1");
    s.project_domain = Some("fin-tech platforms".to_string());

    let close = referent("r1", &["fintech"], &[], &[]);
    let far = referent("r2", &["agriculture"], &[], &[]);

    let close_score = score_detailed(&s, &close).domain;
    let far_score = score_detailed(&s, &far).domain;
    assert!(close_score > far_score);
    assert!(close_score < 100);
}

#[test]
fn domain_match_is_case_insensitive() {
    let mut s = student("s1");
    s.project_domain = Some("  SaaS ".to_string());
    let r = referent("r1", &["saas"], &[], &[]);

    assert_eq!(score_detailed(&s, &r).domain, 100);
}

#[test]
fn score_all_covers_every_pair() {
    let mut s1 = student("s1");
    s1.language = Some("en".to_string());
    let s2 = student("s2");
    let r1 = referent("r1", &[], &["en"], &[]);
    let r2 = referent("r2", &[], &[], &[]);

    let students = vec![s1.clone(), s2.clone()];
    let referents = vec![r1.clone(), r2.clone()];
    let matrix = score_all(students.iter(), referents.iter());

    assert_eq!(matrix.len(), 2);
    assert_eq!(matrix[&sid("s1")].len(), 2);
    assert_eq!(matrix[&sid("s1")][&rid("r1")], 25);
    assert_eq!(matrix[&sid("s1")][&rid("r2")], 0);
    assert_eq!(matrix[&sid("s2")][&rid("r1")], 0);

    // Deterministic: a second pass yields the identical matrix.
    assert_eq!(matrix, score_all(students.iter(), referents.iter()));
}

#[test]
fn breakdown_explanation_names_components() {
    let mut s = student("s1");
    s.language = Some("en".to_string());
    let r = referent("r1", &[], &["en"], &[]);

    let explain = score_detailed(&s, &r).explain();
    assert!(explain.contains("language: 100%"));
    assert!(explain.contains("domain: 0%"));
}
