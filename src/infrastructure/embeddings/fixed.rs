use crate::domain::ports::embedding_port::EmbeddingProvider;
use std::collections::HashMap;

/// Offline provider returning canned vectors, for tests and dry runs.
/// Texts without a canned vector get the fallback.
pub struct FixedEmbeddings {
    by_text: HashMap<String, Vec<f32>>,
    fallback: Vec<f32>,
}

impl FixedEmbeddings {
    pub fn new(fallback: Vec<f32>) -> Self {
        Self {
            by_text: HashMap::new(),
            fallback,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        self.by_text.insert(text.into(), vector);
        self
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for FixedEmbeddings {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, String> {
        Ok(self
            .by_text
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone()))
    }

    fn dimension(&self) -> usize {
        self.fallback.len()
    }
}
