//! Adapter from the provider embeddings endpoint to the catalog's
//! `Embedder` contract.

use async_trait::async_trait;
use carcare_core::error::CatalogError;
use carcare_core::provider::{EmbeddingRequest, Provider};
use carcare_core::retrieval::Embedder;
use std::sync::Arc;

/// Embeds text through a `Provider`'s `/embeddings` endpoint with a fixed
/// model. The catalog crate only sees the `Embedder` trait.
pub struct ProviderEmbedder {
    provider: Arc<dyn Provider>,
    model: String,
}

impl ProviderEmbedder {
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }
}

#[async_trait]
impl Embedder for ProviderEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, CatalogError> {
        let response = self
            .provider
            .embed(EmbeddingRequest {
                model: self.model.clone(),
                inputs: texts.to_vec(),
            })
            .await
            .map_err(|e| CatalogError::EmbeddingFailed(e.to_string()))?;

        if response.embeddings.len() != texts.len() {
            return Err(CatalogError::EmbeddingFailed(format!(
                "Expected {} embeddings, got {}",
                texts.len(),
                response.embeddings.len()
            )));
        }

        Ok(response.embeddings)
    }
}
