//! In-process vector index over one catalog collection.
//!
//! Indexing is a one-shot batch operation at startup: embed every document,
//! store text + embedding side by side. Retrieval embeds the query and
//! ranks by cosine similarity. The index is immutable after construction,
//! so reads need no locking.

use crate::vector::rank_documents;
use async_trait::async_trait;
use carcare_core::error::CatalogError;
use carcare_core::retrieval::{Document, Embedder, Retriever};
use std::sync::Arc;

/// A read-only vector index over one catalog collection.
pub struct CatalogIndex {
    name: String,
    entries: Vec<(String, Vec<f32>)>,
    embedder: Arc<dyn Embedder>,
    top_k: usize,
}

impl std::fmt::Debug for CatalogIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogIndex")
            .field("name", &self.name)
            .field("entries", &self.entries.len())
            .field("top_k", &self.top_k)
            .finish_non_exhaustive()
    }
}

impl CatalogIndex {
    /// Embed and index a collection of document texts.
    ///
    /// One batch embedding call for the whole collection; an embedding
    /// failure here fails startup rather than individual queries later.
    pub async fn build(
        name: impl Into<String>,
        documents: Vec<String>,
        embedder: Arc<dyn Embedder>,
        top_k: usize,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        let embeddings = if documents.is_empty() {
            Vec::new()
        } else {
            embedder.embed(&documents).await?
        };

        if embeddings.len() != documents.len() {
            return Err(CatalogError::EmbeddingFailed(format!(
                "Collection '{}': expected {} embeddings, got {}",
                name,
                documents.len(),
                embeddings.len()
            )));
        }

        tracing::info!(
            collection = %name,
            documents = documents.len(),
            "Indexed catalog collection"
        );

        Ok(Self {
            name,
            entries: documents.into_iter().zip(embeddings).collect(),
            embedder,
            top_k,
        })
    }

    /// The collection name (e.g., "problems").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl Retriever for CatalogIndex {
    async fn retrieve(&self, query: &str) -> Result<Vec<Document>, CatalogError> {
        if self.entries.is_empty() {
            return Ok(Vec::new());
        }

        let query_embedding = self
            .embedder
            .embed(std::slice::from_ref(&query.to_string()))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                CatalogError::EmbeddingFailed("Empty embedding response for query".into())
            })?;

        let ranked = rank_documents(&self.entries, &query_embedding, self.top_k);

        tracing::debug!(
            collection = %self.name,
            query_len = query.len(),
            hits = ranked.len(),
            "Catalog retrieval"
        );

        Ok(ranked
            .into_iter()
            .map(|(text, score)| Document::new(text, score))
            .collect())
    }
}
