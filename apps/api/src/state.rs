use std::sync::Arc;

use crate::config::Config;
use crate::ingest::ImageTextExtractor;
use crate::insight::{InsightGenerator, MetricsExtractor};

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The LLM-facing capabilities are trait objects so handlers and tests never
/// depend on the network; production wires Gemini-backed implementations in
/// `main`, tests swap in mocks.
#[derive(Clone)]
pub struct AppState {
    /// Kept for handlers that need runtime settings; only `main` reads it today.
    #[allow(dead_code)]
    pub config: Config,
    pub extractor: Arc<dyn MetricsExtractor>,
    pub insights: Arc<dyn InsightGenerator>,
    pub vision: Arc<dyn ImageTextExtractor>,
}
