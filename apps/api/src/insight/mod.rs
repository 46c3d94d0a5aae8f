//! Insight engine — pluggable, trait-based capabilities over the LLM.
//!
//! `MetricsExtractor` turns merged profile context into `DetectedMetrics` for
//! the deterministic scoring engine; `InsightGenerator` produces the full
//! advisory report. Both are carried in `AppState` as `Arc<dyn …>` so handlers
//! and tests never depend on the network.

use async_trait::async_trait;
use serde_json::json;

use crate::errors::AppError;
use crate::insight::prompts::{INSIGHT_SYSTEM, METRICS_EXTRACT_PROMPT};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;
use crate::models::insights::CareerInsights;
use crate::models::profile::{DetectedMetrics, UserProfile};
use crate::scoring::ScoreBreakdown;

pub mod prompts;

/// Target roles offered by the product. Insight prompts personalize
/// recommendations against one of these.
pub const TARGET_ROLES: &[&str] = &[
    "Frontend Developer",
    "Backend Developer",
    "Full Stack Developer",
    "Data Scientist",
    "Data Analyst",
    "AI Engineer",
    "ML Engineer",
    "Cloud Architect",
    "Cybersecurity Analyst",
    "Product Manager",
    "DevOps Engineer",
];

/// Extracts structured metrics from a profile's merged input sources.
#[async_trait]
pub trait MetricsExtractor: Send + Sync {
    async fn extract(&self, profile: &UserProfile) -> Result<DetectedMetrics, AppError>;
}

/// Generates the full advisory report for a profile, target role, and the
/// deterministic scores already computed for it.
#[async_trait]
pub trait InsightGenerator: Send + Sync {
    async fn generate(
        &self,
        profile: &UserProfile,
        target_role: &str,
        scores: &ScoreBreakdown,
    ) -> Result<CareerInsights, AppError>;
}

/// LLM-backed extractor.
pub struct GeminiMetricsExtractor(pub LlmClient);

#[async_trait]
impl MetricsExtractor for GeminiMetricsExtractor {
    async fn extract(&self, profile: &UserProfile) -> Result<DetectedMetrics, AppError> {
        let prompt = METRICS_EXTRACT_PROMPT.replace("{context}", &profile.merged_context());
        self.0
            .call_json(&prompt, JSON_ONLY_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Failed to extract profile metrics: {e}")))
    }
}

/// LLM-backed insight generator. The prompt payload mirrors the structure the
/// master system prompt documents: user profile, target role, system scores.
pub struct GeminiInsightGenerator(pub LlmClient);

#[async_trait]
impl InsightGenerator for GeminiInsightGenerator {
    async fn generate(
        &self,
        profile: &UserProfile,
        target_role: &str,
        scores: &ScoreBreakdown,
    ) -> Result<CareerInsights, AppError> {
        let input = json!({
            "user_profile": {
                "name": profile.name,
                "education": profile.education,
                "input_sources": profile.input_sources,
            },
            "target_role": target_role,
            "system_scores": scores,
        });
        let prompt = serde_json::to_string(&input)
            .map_err(|e| AppError::Llm(format!("Failed to encode insight input: {e}")))?;

        self.0
            .call_json(&prompt, INSIGHT_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Failed to generate career insights: {e}")))
    }
}
