use crate::domain::entities::faq_entry::FaqStore;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use std::sync::Arc;

/// Minimum cosine similarity for an FAQ answer to be considered relevant.
pub const RELEVANCE_THRESHOLD: f64 = 0.7;

pub struct RelevanceMatcher {
    store: Arc<FaqStore>,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl RelevanceMatcher {
    pub fn new(store: Arc<FaqStore>, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self { store, embedder }
    }

    /// Embed the query and return the best-matching FAQ answer, if any
    /// clears the threshold.
    pub async fn lookup(&self, query: &str) -> Result<Option<String>, DomainError> {
        let vector = self.embedder.embed(query).await?;
        Ok(self.find_best_match(&vector).map(String::from))
    }

    /// Linear scan over every stored embedding. The comparison is strict,
    /// so on an exact similarity tie the first entry encountered wins —
    /// the store's iteration order is stable, which keeps this
    /// deterministic. At most a few dozen entries live here; no index
    /// structure is warranted.
    pub fn find_best_match(&self, query: &[f32]) -> Option<&str> {
        let mut best: Option<&str> = None;
        let mut highest = -1.0_f64;
        for entry in self.store.entries() {
            let similarity = cosine_similarity(query, &entry.embedding);
            if similarity > highest {
                highest = similarity;
                best = Some(entry.answer.as_str());
            }
        }
        if highest > RELEVANCE_THRESHOLD {
            best
        } else {
            None
        }
    }
}

/// Cosine similarity with f64 accumulation. Mismatched or empty vectors
/// score 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let x = *x as f64;
        let y = *y as f64;
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        0.0
    } else {
        dot / denom
    }
}
