pub mod generate;
pub mod market;
pub mod prompt;
pub mod relevance;
pub mod respond;
pub mod session;
