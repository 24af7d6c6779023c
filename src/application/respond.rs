use crate::application::market::{self, MarketReply, MarketReportUseCase};
use crate::application::prompt::{self, Injection, InjectionPrecedence};
use crate::application::relevance::RelevanceMatcher;
use crate::application::session::SessionStore;
use crate::domain::entities::conversation::ChatTurn;
use crate::domain::error::DomainError;
use crate::domain::ports::chat_port::ChatProvider;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, warn};

/// Reply for a performance question about an instrument outside the fixed
/// table. Terminal: the completion endpoint is not called.
pub const UNKNOWN_INSTRUMENT_REPLY: &str =
    "Por ahora solo puedo consultar el rendimiento del Nasdaq, el SP500 y Bitcoin. \
     Prueba con uno de esos.";

/// Reply when the market data provider has nothing usable for the window.
pub const MARKET_UNAVAILABLE_REPLY: &str =
    "Lo siento, ahora mismo no puedo obtener los datos de mercado. \
     Inténtalo de nuevo más tarde.";

enum Augmentation {
    /// Proceed to the completion call, optionally with one injection.
    Inject(Option<Injection>),
    /// Reply directly without calling the model.
    Terminal(String),
}

/// Per-message orchestration: augment, complete, record, reply.
pub struct RespondUseCase {
    matcher: RelevanceMatcher,
    market: MarketReportUseCase,
    chat: Arc<dyn ChatProvider>,
    sessions: SessionStore,
    precedence: InjectionPrecedence,
}

impl RespondUseCase {
    pub fn new(
        matcher: RelevanceMatcher,
        market: MarketReportUseCase,
        chat: Arc<dyn ChatProvider>,
        sessions: SessionStore,
        precedence: InjectionPrecedence,
    ) -> Self {
        Self {
            matcher,
            market,
            chat,
            sessions,
            precedence,
        }
    }

    /// Handle one inbound message and return the reply text. The session
    /// lock is held across the whole exchange so two messages on the same
    /// chat cannot interleave their history updates. Terminal replies
    /// (guidance and apologies) are not recorded as conversation turns.
    pub async fn execute(&self, chat_id: i64, text: &str) -> Result<String, DomainError> {
        let session = self.sessions.session(chat_id)?;
        let mut history = session.lock().await;

        let injection = match self.augment(text).await? {
            Augmentation::Terminal(reply) => return Ok(reply),
            Augmentation::Inject(injection) => injection,
        };
        debug!(chat_id, injected = injection.is_some(), "assembling prompt");

        let messages = prompt::assemble(&history, injection, text);
        let reply = self
            .chat
            .complete(&messages)
            .await
            .map_err(DomainError::Chat)?;

        history.push(ChatTurn::user(text));
        history.push(ChatTurn::assistant(reply.clone()));
        Ok(reply)
    }

    /// Decide the single augmentation for this message. Which branch is
    /// tried first is configurable; at most one injection ever survives.
    async fn augment(&self, text: &str) -> Result<Augmentation, DomainError> {
        match self.precedence {
            InjectionPrecedence::Market => {
                if market::wants_market_data(text) {
                    self.market_augmentation(text).await
                } else {
                    let matched = self.matcher.lookup(text).await?;
                    Ok(Augmentation::Inject(matched.map(Injection::Relevance)))
                }
            }
            InjectionPrecedence::Relevance => {
                if let Some(matched) = self.matcher.lookup(text).await? {
                    Ok(Augmentation::Inject(Some(Injection::Relevance(matched))))
                } else if market::wants_market_data(text) {
                    self.market_augmentation(text).await
                } else {
                    Ok(Augmentation::Inject(None))
                }
            }
        }
    }

    async fn market_augmentation(&self, text: &str) -> Result<Augmentation, DomainError> {
        let today = Utc::now().date_naive();
        match self.market.execute(text, today).await {
            Ok(MarketReply::Performance(perf)) => {
                Ok(Augmentation::Inject(Some(Injection::Market(perf.to_string()))))
            }
            Ok(MarketReply::UnknownInstrument) => {
                Ok(Augmentation::Terminal(UNKNOWN_INSTRUMENT_REPLY.to_string()))
            }
            Err(DomainError::DataUnavailable(reason)) => {
                warn!("market data unavailable: {reason}");
                Ok(Augmentation::Terminal(MARKET_UNAVAILABLE_REPLY.to_string()))
            }
            Err(e) => Err(e),
        }
    }
}
