pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::generate::embed_faqs;
use crate::application::market::MarketReportUseCase;
use crate::application::prompt::InjectionPrecedence;
use crate::application::relevance::RelevanceMatcher;
use crate::application::respond::RespondUseCase;
use crate::application::session::SessionStore;
use crate::config::Config;
use crate::domain::entities::faq_entry::FaqStore;
use crate::domain::error::DomainError;
use crate::domain::ports::chat_port::ChatProvider;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::market_data::MarketData;
use crate::infrastructure::chat::openai::OpenAiChat;
use crate::infrastructure::embeddings::openai::OpenAiEmbeddings;
use crate::infrastructure::market::yahoo::YahooMarketData;
use crate::infrastructure::store::embedding_file;
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

/// The bot's composition root. Explicitly constructed and passed around —
/// no process-wide singletons.
pub struct TaylorBot {
    pub responder: Arc<RespondUseCase>,
}

impl std::fmt::Debug for TaylorBot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaylorBot").finish_non_exhaustive()
    }
}

impl TaylorBot {
    /// Build with live OpenAI and Yahoo adapters. The embeddings file is
    /// loaded first, so a missing or malformed file aborts startup before
    /// any network client exists.
    pub fn from_config(config: &Config) -> Result<Self, DomainError> {
        let store = embedding_file::load(&config.embeddings_file)?;

        let embedder: Arc<dyn EmbeddingProvider> = Arc::new(OpenAiEmbeddings::new(
            config.openai_api_key.clone(),
            Some(config.embedding_model.clone()),
            config.http_timeout,
        ));
        let chat: Arc<dyn ChatProvider> = Arc::new(OpenAiChat::new(
            config.openai_api_key.clone(),
            Some(config.chat_model.clone()),
            config.http_timeout,
        ));
        let market: Arc<dyn MarketData> = Arc::new(YahooMarketData::new(config.http_timeout));

        Ok(Self::with_providers(
            store,
            embedder,
            chat,
            market,
            config.history_cap,
            config.injection_precedence,
        ))
    }

    /// Wire the use cases from explicit collaborators. Tests use this with
    /// fixed in-process fakes.
    pub fn with_providers(
        store: FaqStore,
        embedder: Arc<dyn EmbeddingProvider>,
        chat: Arc<dyn ChatProvider>,
        market: Arc<dyn MarketData>,
        history_cap: usize,
        precedence: InjectionPrecedence,
    ) -> Self {
        let provider_dim = embedder.dimension();
        if let Some(stored_dim) = store.dimension() {
            if provider_dim > 0 && stored_dim != provider_dim {
                warn!(
                    "stored embeddings have dimension {stored_dim} but the provider reports \
                     {provider_dim}; regenerate the embeddings file"
                );
            }
        }

        let matcher = RelevanceMatcher::new(Arc::new(store), embedder);
        let market_uc = MarketReportUseCase::new(market);
        let sessions = SessionStore::new(history_cap);

        Self {
            responder: Arc::new(RespondUseCase::new(
                matcher, market_uc, chat, sessions, precedence,
            )),
        }
    }

    pub async fn respond(&self, chat_id: i64, text: &str) -> Result<String, DomainError> {
        self.responder.execute(chat_id, text).await
    }
}

/// Offline generation: read the FAQ source, embed every answer, write the
/// startup embeddings file. Returns the number of entries written.
pub async fn generate_embeddings(
    embedder: &dyn EmbeddingProvider,
    faqs_path: &Path,
    out_path: &Path,
) -> Result<usize, DomainError> {
    let faqs = embedding_file::load_faq_source(faqs_path)?;
    let entries = embed_faqs(embedder, &faqs).await?;
    embedding_file::write(out_path, &entries)?;
    Ok(entries.len())
}
