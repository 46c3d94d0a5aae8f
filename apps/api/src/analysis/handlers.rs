//! Axum route handlers for the profile analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::{run_analysis, AnalysisResponse};
use crate::errors::AppError;
use crate::insight::TARGET_ROLES;
use crate::models::profile::{DetectedMetrics, UserProfile};
use crate::scoring::{compute_scores, ScoreBreakdown};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub profile: UserProfile,
}

#[derive(Debug, Deserialize)]
pub struct MetricsRequest {
    pub profile: UserProfile,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub profile: UserProfile,
    pub target_role: String,
}

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub roles: &'static [&'static str],
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/profile/score
///
/// Deterministic readiness scoring. Never calls the LLM, so the simulator can
/// hit it on every toggle with a hypothetical copy of the profile.
pub async fn handle_score(
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreBreakdown>, AppError> {
    Ok(Json(compute_scores(&request.profile)))
}

/// POST /api/v1/profile/metrics
///
/// Extracts `DetectedMetrics` from the profile's input sources.
pub async fn handle_extract_metrics(
    State(state): State<AppState>,
    Json(request): Json<MetricsRequest>,
) -> Result<Json<DetectedMetrics>, AppError> {
    require_sources(&request.profile)?;
    let metrics = state.extractor.extract(&request.profile).await?;
    Ok(Json(metrics))
}

/// POST /api/v1/analyze
///
/// Full pipeline: extract metrics, score deterministically, generate insights.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    require_sources(&request.profile)?;
    if request.target_role.trim().is_empty() {
        return Err(AppError::Validation(
            "target_role cannot be empty".to_string(),
        ));
    }

    let response = run_analysis(
        &request.profile,
        &request.target_role,
        state.extractor.as_ref(),
        state.insights.as_ref(),
    )
    .await?;

    Ok(Json(response))
}

/// GET /api/v1/roles
pub async fn handle_roles() -> Json<RolesResponse> {
    Json(RolesResponse {
        roles: TARGET_ROLES,
    })
}

fn require_sources(profile: &UserProfile) -> Result<(), AppError> {
    if profile.input_sources.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Minimum one input source required for analysis".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::errors::AppError;
    use crate::ingest::ImageTextExtractor;
    use crate::insight::{InsightGenerator, MetricsExtractor};
    use crate::models::insights::{CareerInsights, FutureSimulation};
    use crate::models::profile::{InputSource, SourceKind};
    use crate::routes::build_router;

    struct FixedExtractor(DetectedMetrics);

    #[async_trait]
    impl MetricsExtractor for FixedExtractor {
        async fn extract(&self, _profile: &UserProfile) -> Result<DetectedMetrics, AppError> {
            Ok(self.0.clone())
        }
    }

    struct CannedInsights;

    #[async_trait]
    impl InsightGenerator for CannedInsights {
        async fn generate(
            &self,
            _profile: &UserProfile,
            target_role: &str,
            scores: &ScoreBreakdown,
        ) -> Result<CareerInsights, AppError> {
            Ok(CareerInsights {
                strengths: vec![format!("ready for {target_role}")],
                weaknesses: vec![],
                project_recommendations: vec![],
                skill_roadmap: vec![],
                certifications: vec![],
                internship_categories: vec![],
                hackathon_categories: vec![],
                career_explanation: format!("overall {}", scores.overall_score),
                future_simulation: FutureSimulation {
                    if_user_completes: vec!["Ship one backend project".to_string()],
                    expected_score_range: "40-55".to_string(),
                },
            })
        }
    }

    struct NoVision;

    #[async_trait]
    impl ImageTextExtractor for NoVision {
        async fn extract_text(&self, _mime: &str, _data: &[u8]) -> Result<String, AppError> {
            Err(AppError::Llm("vision disabled in tests".to_string()))
        }
    }

    fn test_app(metrics: DetectedMetrics) -> axum::Router {
        build_router(AppState {
            config: Config::for_tests(),
            extractor: Arc::new(FixedExtractor(metrics)),
            insights: Arc::new(CannedInsights),
            vision: Arc::new(NoVision),
        })
    }

    fn profile_with_source() -> serde_json::Value {
        serde_json::to_value(UserProfile {
            name: "Jordan".to_string(),
            education: "BSc".to_string(),
            input_sources: vec![InputSource {
                kind: SourceKind::Text,
                label: "bio".to_string(),
                filename: None,
                content: "Built three Rust services".to_string(),
            }],
            detected_metrics: None,
        })
        .unwrap()
    }

    async fn post_json(app: axum::Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_score_endpoint_is_pure_and_total() {
        let app = test_app(DetectedMetrics::default());
        let (status, body) = post_json(
            app,
            "/api/v1/profile/score",
            serde_json::json!({"profile": {}}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["overall_score"], 0);
        assert_eq!(body["skills_score"], 0);
    }

    #[tokio::test]
    async fn test_score_endpoint_with_metrics_attached() {
        let app = test_app(DetectedMetrics::default());
        let body = serde_json::json!({
            "profile": {
                "education": "BSc",
                "detected_metrics": {
                    "skills": ["a", "b", "c"],
                    "interests": ["x"]
                }
            }
        });
        let (status, body) = post_json(app, "/api/v1/profile/score", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skills_score"], 45);
        assert_eq!(body["overall_score"], 24);
    }

    #[tokio::test]
    async fn test_metrics_endpoint_requires_sources() {
        let app = test_app(DetectedMetrics::default());
        let (status, body) = post_json(
            app,
            "/api/v1/profile/metrics",
            serde_json::json!({"profile": {}}),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_metrics_endpoint_returns_extracted_metrics() {
        let metrics = DetectedMetrics {
            skills: vec!["Rust".to_string()],
            ..Default::default()
        };
        let app = test_app(metrics);
        let (status, body) = post_json(
            app,
            "/api/v1/profile/metrics",
            serde_json::json!({"profile": profile_with_source()}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skills"][0], "Rust");
    }

    #[tokio::test]
    async fn test_analyze_scores_against_extracted_metrics() {
        let metrics = DetectedMetrics {
            skills: vec!["a".into(), "b".into(), "c".into()],
            interests: vec!["x".into()],
            ..Default::default()
        };
        let app = test_app(metrics);
        let (status, body) = post_json(
            app,
            "/api/v1/analyze",
            serde_json::json!({
                "profile": profile_with_source(),
                "target_role": "Backend Developer"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["scores"]["skills_score"], 45);
        assert_eq!(body["scores"]["overall_score"], 24);
        assert_eq!(body["detected_metrics"]["skills"].as_array().unwrap().len(), 3);
        assert_eq!(body["insights"]["strengths"][0], "ready for Backend Developer");
        assert!(body["generated_at"].is_string());
    }

    #[tokio::test]
    async fn test_analyze_rejects_empty_target_role() {
        let app = test_app(DetectedMetrics::default());
        let (status, body) = post_json(
            app,
            "/api/v1/analyze",
            serde_json::json!({
                "profile": profile_with_source(),
                "target_role": "  "
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_roles_endpoint_lists_canonical_roles() {
        let app = test_app(DetectedMetrics::default());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/roles")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let roles = body["roles"].as_array().unwrap();
        assert!(roles.iter().any(|r| r == "Full Stack Developer"));
        assert_eq!(roles.len(), 11);
    }
}
