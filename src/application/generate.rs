use crate::domain::entities::faq_entry::FaqEntry;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use std::collections::BTreeMap;
use tracing::info;

/// Offline step: embed every FAQ answer once, producing the entries that
/// the serving process later loads from disk. One provider call per entry;
/// any failure aborts the run so a partial file is never written.
pub async fn embed_faqs(
    embedder: &dyn EmbeddingProvider,
    faqs: &BTreeMap<String, String>,
) -> Result<Vec<FaqEntry>, DomainError> {
    let mut entries = Vec::with_capacity(faqs.len());
    for (key, answer) in faqs {
        let embedding = embedder.embed(answer).await?;
        info!(key = key.as_str(), dims = embedding.len(), "embedded FAQ entry");
        entries.push(FaqEntry {
            key: key.clone(),
            answer: answer.clone(),
            embedding,
        });
    }
    Ok(entries)
}
