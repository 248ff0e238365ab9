//! Vector similarity utilities.
//!
//! Pure-Rust cosine similarity and top-k ranking over indexed documents.

/// Compute cosine similarity between two vectors.
///
/// Returns a value in [-1, 1] where 1 = identical, 0 = orthogonal, -1 =
/// opposite. Returns 0.0 if either vector is zero-length or empty.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;

    for (x, y) in a.iter().zip(b.iter()) {
        let x = *x as f64;
        let y = *y as f64;
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom < 1e-10 {
        return 0.0;
    }

    (dot / denom) as f32
}

/// Rank document texts by cosine similarity to a query embedding.
///
/// `entries` pairs each document text with its stored embedding. Returns
/// `(text, score)` pairs sorted by descending similarity, truncated to
/// `limit`. An empty return means nothing matched, not an error.
pub fn rank_documents(
    entries: &[(String, Vec<f32>)],
    query_embedding: &[f32],
    limit: usize,
) -> Vec<(String, f32)> {
    let mut scored: Vec<(String, f32)> = entries
        .iter()
        .map(|(text, emb)| (text.clone(), cosine_similarity(emb, query_embedding)))
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(limit);
    scored
}
