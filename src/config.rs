use crate::application::prompt::InjectionPrecedence;
use crate::domain::error::DomainError;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Variables without which the bot refuses to start.
pub const REQUIRED_VARS: &[&str] = &["OPENAI_API_KEY", "TELEGRAM_BOT_TOKEN"];

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub telegram_bot_token: String,
    pub embeddings_file: PathBuf,
    pub chat_model: String,
    pub embedding_model: String,
    pub history_cap: usize,
    pub http_timeout: Duration,
    pub injection_precedence: InjectionPrecedence,
}

impl Config {
    /// Read the full bot configuration from the environment. Missing
    /// required variables are an explicit fatal error.
    pub fn from_env() -> Result<Self, DomainError> {
        Ok(Self {
            openai_api_key: require("OPENAI_API_KEY")?,
            telegram_bot_token: require("TELEGRAM_BOT_TOKEN")?,
            embeddings_file: PathBuf::from(var_or(
                "TAYLOR_EMBEDDINGS_FILE",
                "taylor_embeddings.json",
            )),
            chat_model: var_or("TAYLOR_CHAT_MODEL", "gpt-4o"),
            embedding_model: var_or("TAYLOR_EMBEDDING_MODEL", "text-embedding-ada-002"),
            history_cap: parse_or("TAYLOR_HISTORY_CAP", 20),
            http_timeout: Duration::from_secs(parse_or("TAYLOR_HTTP_TIMEOUT_SECS", 30)),
            injection_precedence: parse_or(
                "TAYLOR_INJECTION_PRECEDENCE",
                InjectionPrecedence::default(),
            ),
        })
    }
}

fn require(name: &str) -> Result<String, DomainError> {
    match std::env::var(name) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => Err(DomainError::Config(format!(
            "missing required environment variable {name}"
        ))),
    }
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
