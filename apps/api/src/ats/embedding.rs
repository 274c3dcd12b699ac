//! Embedding backend for the ATS scanner.
//!
//! `AppState` holds an `Arc<dyn Embedder>` so the scorer can be exercised with
//! a deterministic double in tests while production uses a Model2Vec static
//! model. The model is heavyweight to load, so `Model2VecEmbedder` defers
//! loading to the first call and then reuses the instance for the lifetime of
//! the process.

use std::sync::Arc;

use async_trait::async_trait;
use model2vec_rs::model::StaticModel;
use tokio::sync::OnceCell;
use tracing::info;

use crate::errors::AppError;

/// The embedding seam. Implementations must produce comparable vectors for
/// any two texts passed to the same instance.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, AppError>;
}

/// Production embedder backed by a Model2Vec static model, loaded from a
/// HuggingFace repo id or a local directory.
pub struct Model2VecEmbedder {
    source: String,
    model: OnceCell<Arc<StaticModel>>,
}

impl Model2VecEmbedder {
    pub fn new(source: String) -> Self {
        Self {
            source,
            model: OnceCell::new(),
        }
    }

    /// Accessor for the lazily loaded model. The first caller pays the load
    /// cost on the blocking pool; concurrent callers wait on the same cell.
    /// A failed load leaves the cell empty so a later call can retry.
    async fn model(&self) -> Result<Arc<StaticModel>, AppError> {
        let model = self
            .model
            .get_or_try_init(|| async {
                let source = self.source.clone();
                info!("Loading embedding model '{source}'");
                let model = tokio::task::spawn_blocking(move || {
                    StaticModel::from_pretrained(&source, None, None, None)
                })
                .await
                .map_err(|e| {
                    AppError::ScorerUnavailable(format!("embedding model load task failed: {e}"))
                })?
                .map_err(|e| {
                    AppError::ScorerUnavailable(format!("failed to load embedding model: {e}"))
                })?;
                Ok::<_, AppError>(Arc::new(model))
            })
            .await?;

        Ok(model.clone())
    }
}

#[async_trait]
impl Embedder for Model2VecEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, AppError> {
        let model = self.model().await?;
        let text = text.to_string();

        // Encoding is CPU-bound; keep it off the async runtime.
        tokio::task::spawn_blocking(move || model.encode_single(&text))
            .await
            .map_err(|e| AppError::ScorerUnavailable(format!("embedding task failed: {e}")))
    }
}
