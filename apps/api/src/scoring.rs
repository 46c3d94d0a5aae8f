//! Score Calculation Engine — deterministic readiness scoring over detected metrics.
//!
//! Pure and total: no I/O, no shared state, never fails. The simulator relies on
//! calling this repeatedly against mutated copies of a profile, so it must stay
//! free of any notion of "real" vs "hypothetical" input.

use serde::{Deserialize, Serialize};

use crate::models::profile::{DetectedMetrics, UserProfile};

/// Per-category scores plus the weighted overall readiness score.
/// All values are integers in [0, 100] by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills_score: u8,
    pub projects_score: u8,
    pub internships_score: u8,
    pub certifications_score: u8,
    pub overall_score: u8,
}

// Per-item factors for the linear category scores, each capped at 100.
const SKILL_FACTOR: usize = 15;
const PROJECT_FACTOR: usize = 25;
const INTERNSHIP_FACTOR: usize = 50;
const CERTIFICATION_FACTOR: usize = 35;

// Overall weights. They sum to 1.0, so the weighted sum of capped
// sub-scores can never exceed 100.
const SKILLS_WEIGHT: f64 = 0.30;
const PROJECTS_WEIGHT: f64 = 0.25;
const INTERNSHIPS_WEIGHT: f64 = 0.20;
const CERTIFICATIONS_WEIGHT: f64 = 0.15;
const QUALITY_WEIGHT: f64 = 0.10;

/// Computes the full score breakdown for a profile.
///
/// A profile without `detected_metrics` scores as if every metric sequence
/// were empty. Caps apply per category before weighting; the weighted sum is
/// rounded half-up exactly once, at the end.
pub fn compute_scores(profile: &UserProfile) -> ScoreBreakdown {
    let empty = DetectedMetrics::default();
    let metrics = profile.detected_metrics.as_ref().unwrap_or(&empty);

    let skills_score = category_score(metrics.skills.len(), SKILL_FACTOR);
    let projects_score = category_score(metrics.projects.len(), PROJECT_FACTOR);
    let internships_score = category_score(metrics.internships.len(), INTERNSHIP_FACTOR);
    let certifications_score = category_score(metrics.certifications.len(), CERTIFICATION_FACTOR);

    let profile_quality = profile_quality(profile, metrics);

    let overall_score = (f64::from(skills_score) * SKILLS_WEIGHT
        + f64::from(projects_score) * PROJECTS_WEIGHT
        + f64::from(internships_score) * INTERNSHIPS_WEIGHT
        + f64::from(certifications_score) * CERTIFICATIONS_WEIGHT
        + f64::from(profile_quality) * QUALITY_WEIGHT)
        .round() as u8;

    ScoreBreakdown {
        skills_score,
        projects_score,
        internships_score,
        certifications_score,
        overall_score,
    }
}

fn category_score(count: usize, factor: usize) -> u8 {
    count.saturating_mul(factor).min(100) as u8
}

/// Completeness bonus folded into the overall score with 10% weight.
/// Not exposed in the breakdown. Education counts when the string is
/// non-empty, untrimmed; the skills bonus requires strictly more than two.
fn profile_quality(profile: &UserProfile, metrics: &DetectedMetrics) -> u8 {
    let mut quality = 0;
    if !profile.education.is_empty() {
        quality += 40;
    }
    if !metrics.interests.is_empty() {
        quality += 30;
    }
    if metrics.skills.len() > 2 {
        quality += 30;
    }
    quality
}
