//! On-disk JSON formats: the pre-computed embeddings file the serving
//! process loads at startup, and the FAQ source file the offline
//! generator reads.
//!
//! The embeddings file is an object mapping FAQ key to
//! `{"text": .., "embedding": [..]}`. Keys deserialize through a
//! `BTreeMap`, so the in-memory store always iterates in lexicographic
//! key order regardless of file layout.

use crate::domain::entities::faq_entry::{FaqEntry, FaqStore};
use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
struct StoredFaq {
    text: String,
    embedding: Vec<f32>,
}

/// Load the embeddings file. A missing or malformed file is an error the
/// caller treats as fatal at startup.
pub fn load(path: &Path) -> Result<FaqStore, DomainError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        DomainError::Store(format!(
            "cannot read embeddings file {}: {e}. Run `generate-embeddings` first.",
            path.display()
        ))
    })?;
    let map: BTreeMap<String, StoredFaq> = serde_json::from_str(&raw).map_err(|e| {
        DomainError::Store(format!(
            "malformed embeddings file {}: {e}",
            path.display()
        ))
    })?;
    let entries = map
        .into_iter()
        .map(|(key, faq)| FaqEntry {
            key,
            answer: faq.text,
            embedding: faq.embedding,
        })
        .collect();
    Ok(FaqStore::new(entries))
}

/// Write entries in the startup-file format (pretty-printed, like the
/// generator has always produced).
pub fn write(path: &Path, entries: &[FaqEntry]) -> Result<(), DomainError> {
    let map: BTreeMap<&str, StoredFaq> = entries
        .iter()
        .map(|e| {
            (
                e.key.as_str(),
                StoredFaq {
                    text: e.answer.clone(),
                    embedding: e.embedding.clone(),
                },
            )
        })
        .collect();
    let json = serde_json::to_string_pretty(&map)
        .map_err(|e| DomainError::Store(format!("cannot serialize embeddings: {e}")))?;
    std::fs::write(path, json).map_err(|e| {
        DomainError::Store(format!("cannot write embeddings file {}: {e}", path.display()))
    })
}

/// Load the FAQ source file: an object whose top-level `"taylor"` key maps
/// FAQ key to answer text.
pub fn load_faq_source(path: &Path) -> Result<BTreeMap<String, String>, DomainError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        DomainError::Store(format!("cannot read FAQ source {}: {e}", path.display()))
    })?;
    let mut doc: BTreeMap<String, BTreeMap<String, String>> = serde_json::from_str(&raw)
        .map_err(|e| DomainError::Store(format!("malformed FAQ source {}: {e}", path.display())))?;
    doc.remove("taylor").ok_or_else(|| {
        DomainError::Store(format!(
            "FAQ source {} is missing the top-level \"taylor\" key",
            path.display()
        ))
    })
}
