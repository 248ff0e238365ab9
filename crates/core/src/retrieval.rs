//! Retrieval traits — the boundary between business logic and the catalog
//! index.
//!
//! The coordinator and the tool layer only ever see `retrieve(query)` on a
//! collection and a list of scored documents back. How the documents were
//! embedded and ranked is the catalog crate's business; tests substitute
//! deterministic implementations.

use crate::error::CatalogError;
use async_trait::async_trait;

/// A single retrieved document with its relevance score.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// The full document text
    pub text: String,

    /// Similarity score set by the search (higher = more relevant)
    pub score: f32,
}

impl Document {
    pub fn new(text: impl Into<String>, score: f32) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }

    /// The first `max_chars` characters of the document text.
    ///
    /// Truncation is on a character boundary, not a byte boundary, so
    /// multi-byte content never panics.
    pub fn snippet(&self, max_chars: usize) -> String {
        self.text.chars().take(max_chars).collect()
    }
}

/// The retrieval contract: a text query in, the top-k most similar
/// documents out, best first.
///
/// An empty result list means "no relevant entries found" and is never an
/// error; errors are reserved for upstream failures (embedding backend,
/// storage).
#[async_trait]
pub trait Retriever: Send + Sync {
    async fn retrieve(&self, query: &str) -> std::result::Result<Vec<Document>, CatalogError>;
}

/// The embedding contract used when indexing catalogs and embedding queries.
///
/// Implemented over the provider's embeddings endpoint in production and by
/// a deterministic hash-based embedder in tests.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, texts: &[String]) -> std::result::Result<Vec<Vec<f32>>, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_truncates_to_char_count() {
        let doc = Document::new("a".repeat(300), 0.9);
        assert_eq!(doc.snippet(200).len(), 200);
    }

    #[test]
    fn snippet_shorter_text_unchanged() {
        let doc = Document::new("Worn brake pads", 0.8);
        assert_eq!(doc.snippet(200), "Worn brake pads");
    }

    #[test]
    fn snippet_handles_multibyte() {
        let doc = Document::new("é".repeat(250), 0.5);
        let snip = doc.snippet(200);
        assert_eq!(snip.chars().count(), 200);
    }
}
