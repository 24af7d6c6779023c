pub mod chat;
pub mod embeddings;
pub mod market;
pub mod store;
pub mod telegram;
