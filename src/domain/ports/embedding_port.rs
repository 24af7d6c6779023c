#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed one text into a fixed-length vector.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, String>;

    /// Vector length this provider produces, or 0 when unknown.
    fn dimension(&self) -> usize;
}
