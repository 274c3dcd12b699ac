use std::sync::Arc;

use crate::ats::embedding::Embedder;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Pluggable embedding backend. Default: Model2VecEmbedder, loaded lazily
    /// on the first scan. Tests swap in a deterministic double.
    pub embedder: Arc<dyn Embedder>,
}
