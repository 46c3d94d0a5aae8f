pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis_handlers;
use crate::ingest::handlers as ingest_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Ingestion
        .route(
            "/api/v1/ingest/document",
            post(ingest_handlers::handle_ingest_document),
        )
        // Profile analysis
        .route(
            "/api/v1/profile/score",
            post(analysis_handlers::handle_score),
        )
        .route(
            "/api/v1/profile/metrics",
            post(analysis_handlers::handle_extract_metrics),
        )
        .route("/api/v1/analyze", post(analysis_handlers::handle_analyze))
        .route("/api/v1/roles", get(analysis_handlers::handle_roles))
        .with_state(state)
}
