use crate::domain::entities::conversation::ConversationHistory;
use crate::domain::error::DomainError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Mutex as AsyncMutex;

/// Per-chat conversation state, keyed by the messaging platform's chat id.
///
/// Each session carries its own async lock; a handler holds it for the
/// whole read-assemble-append exchange, so concurrent deliveries on the
/// same chat serialize instead of racing on the history. Unrelated chats
/// proceed in parallel.
pub struct SessionStore {
    cap: usize,
    sessions: Mutex<HashMap<i64, Arc<AsyncMutex<ConversationHistory>>>>,
}

impl SessionStore {
    /// `cap` bounds each history; the oldest turn is evicted past it.
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch or create the session for a chat.
    pub fn session(&self, chat_id: i64) -> Result<Arc<AsyncMutex<ConversationHistory>>, DomainError> {
        let mut map = self
            .sessions
            .lock()
            .map_err(|e| DomainError::Store(e.to_string()))?;
        Ok(map
            .entry(chat_id)
            .or_insert_with(|| Arc::new(AsyncMutex::new(ConversationHistory::with_cap(self.cap))))
            .clone())
    }
}
