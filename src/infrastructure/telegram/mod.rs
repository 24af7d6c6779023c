//! Thin Telegram Bot API client: long-poll `getUpdates` plus
//! `sendMessage`, nothing else. Only plain text messages are handled.

use crate::application::respond::RespondUseCase;
use crate::domain::error::DomainError;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Long-poll window for getUpdates.
const POLL_TIMEOUT_SECS: u64 = 30;

/// Fallback reply when handling a message fails outright.
const HANDLER_ERROR_REPLY: &str =
    "Lo siento, ha ocurrido un error procesando tu mensaje. Inténtalo de nuevo.";

pub struct TelegramClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}

impl TelegramClient {
    pub fn new(token: &str) -> Self {
        Self {
            // The request timeout must sit above the long-poll window or
            // every idle poll times out.
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(POLL_TIMEOUT_SECS + 10))
                .build()
                .unwrap_or_default(),
            base_url: format!("https://api.telegram.org/bot{token}"),
        }
    }

    pub async fn get_updates(&self, offset: i64) -> Result<Vec<Update>, DomainError> {
        let url = format!(
            "{}/getUpdates?offset={offset}&timeout={POLL_TIMEOUT_SECS}",
            self.base_url
        );
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::Messaging(format!("getUpdates failed: {e}")))?;
        let body: ApiResponse<Vec<Update>> = resp
            .json()
            .await
            .map_err(|e| DomainError::Messaging(format!("getUpdates parse error: {e}")))?;
        if !body.ok {
            return Err(DomainError::Messaging(format!(
                "getUpdates rejected: {}",
                body.description.unwrap_or_default()
            )));
        }
        Ok(body.result.unwrap_or_default())
    }

    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), DomainError> {
        let url = format!("{}/sendMessage", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&json!({ "chat_id": chat_id, "text": text }))
            .send()
            .await
            .map_err(|e| DomainError::Messaging(format!("sendMessage failed: {e}")))?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::Messaging(format!(
                "sendMessage {status}: {body}"
            )));
        }
        Ok(())
    }
}

/// Poll for updates forever, spawning one task per inbound message so a
/// slow external call on one chat never stalls the others. A failure
/// inside a handler is logged, answered with an apology, and dropped —
/// the loop itself keeps serving.
pub async fn run_loop(
    client: Arc<TelegramClient>,
    responder: Arc<RespondUseCase>,
) -> Result<(), DomainError> {
    info!("Taylor bot polling Telegram for updates");
    let mut offset = 0_i64;
    loop {
        let updates = match client.get_updates(offset).await {
            Ok(updates) => updates,
            Err(e) => {
                warn!("polling error: {e}");
                tokio::time::sleep(Duration::from_secs(5)).await;
                continue;
            }
        };

        for update in updates {
            offset = offset.max(update.update_id + 1);
            let Some(message) = update.message else {
                continue;
            };
            let Some(text) = message.text else {
                continue;
            };
            let chat_id = message.chat.id;

            let client = client.clone();
            let responder = responder.clone();
            tokio::spawn(async move {
                match responder.execute(chat_id, &text).await {
                    Ok(reply) => {
                        if let Err(e) = client.send_message(chat_id, &reply).await {
                            warn!(chat_id, "failed to send reply: {e}");
                        }
                    }
                    Err(e) => {
                        warn!(chat_id, "failed to handle message: {e}");
                        if let Err(e) = client.send_message(chat_id, HANDLER_ERROR_REPLY).await {
                            warn!(chat_id, "failed to send error reply: {e}");
                        }
                    }
                }
            });
        }
    }
}
