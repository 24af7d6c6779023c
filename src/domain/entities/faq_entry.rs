use serde::{Deserialize, Serialize};

/// One FAQ answer with its pre-computed embedding. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub key: String,
    pub answer: String,
    pub embedding: Vec<f32>,
}

/// In-memory FAQ collection, loaded once at startup and never mutated.
///
/// Entries keep the order they were handed in (the file loader sorts by
/// key), so linear scans over the store are deterministic.
#[derive(Debug, Clone, Default)]
pub struct FaqStore {
    entries: Vec<FaqEntry>,
}

impl FaqStore {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Embedding dimension of the stored vectors, if any entries exist.
    pub fn dimension(&self) -> Option<usize> {
        self.entries.first().map(|e| e.embedding.len())
    }
}
