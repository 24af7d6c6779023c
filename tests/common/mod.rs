//! Shared test helpers: in-process fakes for the chat, embedding, and
//! market data ports.

use std::sync::{Arc, Mutex};
use taylorbot::application::prompt::InjectionPrecedence;
use taylorbot::domain::entities::conversation::ChatTurn;
use taylorbot::domain::entities::faq_entry::{FaqEntry, FaqStore};
use taylorbot::domain::ports::chat_port::ChatProvider;
use taylorbot::domain::ports::market_data::{MarketData, MarketDataError, PricePoint};
use taylorbot::domain::values::date_range::DateRange;
use taylorbot::infrastructure::embeddings::fixed::FixedEmbeddings;
use taylorbot::TaylorBot;

/// Chat fake: returns a canned reply and records every message list it
/// was handed, so tests can inspect the assembled prompt.
pub struct FixedChat {
    reply: String,
    captured: Arc<Mutex<Vec<Vec<ChatTurn>>>>,
}

impl FixedChat {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            captured: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn capture_handle(&self) -> Arc<Mutex<Vec<Vec<ChatTurn>>>> {
        self.captured.clone()
    }
}

#[async_trait::async_trait]
impl ChatProvider for FixedChat {
    async fn complete(&self, messages: &[ChatTurn]) -> Result<String, String> {
        self.captured.lock().unwrap().push(messages.to_vec());
        Ok(self.reply.clone())
    }
}

/// Market data fake returning a canned series.
pub struct FixedMarket {
    series: Vec<PricePoint>,
}

impl FixedMarket {
    pub fn new(series: Vec<PricePoint>) -> Self {
        Self { series }
    }

    pub fn empty() -> Self {
        Self { series: vec![] }
    }

    pub fn adj_closes(prices: &[f64]) -> Self {
        Self {
            series: prices
                .iter()
                .map(|&p| PricePoint {
                    adj_close: Some(p),
                    close: None,
                })
                .collect(),
        }
    }
}

#[async_trait::async_trait]
impl MarketData for FixedMarket {
    async fn daily_series(
        &self,
        _ticker: &str,
        _range: DateRange,
    ) -> Result<Vec<PricePoint>, MarketDataError> {
        Ok(self.series.clone())
    }
}

pub fn make_store(entries: &[(&str, &str, Vec<f32>)]) -> FaqStore {
    FaqStore::new(
        entries
            .iter()
            .map(|(key, answer, embedding)| FaqEntry {
                key: key.to_string(),
                answer: answer.to_string(),
                embedding: embedding.clone(),
            })
            .collect(),
    )
}

/// Wire a bot from fakes with a history cap of 20.
pub fn setup_bot(
    store: FaqStore,
    embedder: FixedEmbeddings,
    chat: FixedChat,
    market: FixedMarket,
    precedence: InjectionPrecedence,
) -> TaylorBot {
    TaylorBot::with_providers(
        store,
        Arc::new(embedder),
        Arc::new(chat),
        Arc::new(market),
        20,
        precedence,
    )
}
