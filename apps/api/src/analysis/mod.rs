//! Analysis pipeline — metric extraction, deterministic scoring, insight
//! generation, in that order. Scores are derived on demand and never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::insight::{InsightGenerator, MetricsExtractor};
use crate::models::insights::CareerInsights;
use crate::models::profile::{DetectedMetrics, UserProfile};
use crate::scoring::{compute_scores, ScoreBreakdown};

pub mod handlers;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub target_role: String,
    pub detected_metrics: DetectedMetrics,
    pub scores: ScoreBreakdown,
    pub insights: CareerInsights,
    pub generated_at: DateTime<Utc>,
}

/// Runs the full pipeline for one profile. The caller keeps the returned
/// metrics; attaching them to the session profile lets the simulator rescore
/// mutated copies locally without another extraction round-trip.
pub async fn run_analysis(
    profile: &UserProfile,
    target_role: &str,
    extractor: &dyn MetricsExtractor,
    generator: &dyn InsightGenerator,
) -> Result<AnalysisResponse, AppError> {
    let detected_metrics = extractor.extract(profile).await?;

    let mut enriched = profile.clone();
    enriched.detected_metrics = Some(detected_metrics.clone());
    let scores = compute_scores(&enriched);

    let insights = generator.generate(&enriched, target_role, &scores).await?;

    Ok(AnalysisResponse {
        target_role: target_role.to_string(),
        detected_metrics,
        scores,
        insights,
        generated_at: Utc::now(),
    })
}
