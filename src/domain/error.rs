use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("Market data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Messaging error: {0}")]
    Messaging(String),
}

impl From<String> for DomainError {
    fn from(s: String) -> Self {
        DomainError::Embedding(s)
    }
}

impl From<&str> for DomainError {
    fn from(s: &str) -> Self {
        DomainError::Config(s.to_string())
    }
}
