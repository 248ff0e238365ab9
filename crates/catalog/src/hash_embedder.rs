//! Deterministic local embedder — no network access.
//!
//! Hashes character trigrams into a small fixed-dimension vector, so
//! similar strings land on similar vectors. Nowhere near a real embedding
//! model, but good enough to exercise the whole indexing and retrieval
//! path in tests and in offline runs (`carcare doctor`).

use async_trait::async_trait;
use carcare_core::error::CatalogError;
use carcare_core::retrieval::Embedder;

pub struct HashEmbedder {
    dims: usize,
}

impl HashEmbedder {
    pub fn new() -> Self {
        Self { dims: 32 }
    }

    fn embed_one(&self, text: &str) -> Vec<f32> {
        let mut v = vec![0.0f32; self.dims];
        let lower = text.to_lowercase();
        let chars: Vec<char> = lower.chars().collect();
        for window in chars.windows(3) {
            let mut h: u32 = 0;
            for c in window {
                h = h.wrapping_mul(31).wrapping_add(*c as u32);
            }
            v[(h as usize) % self.dims] += 1.0;
        }
        v
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Embedder for HashEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, CatalogError> {
        Ok(texts.iter().map(|t| self.embed_one(t)).collect())
    }
}
