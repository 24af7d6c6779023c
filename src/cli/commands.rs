use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "taylorbot", about = "Telegram support bot for the Taylor investment product")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the Telegram polling loop
    Run,
    /// Answer a single message from the command line, without Telegram
    Ask {
        text: String,
        /// Session to attach the exchange to
        #[arg(long, default_value = "0")]
        chat_id: i64,
    },
    /// Embed the FAQ answers and write the startup embeddings file
    GenerateEmbeddings {
        /// FAQ source JSON (top-level "taylor" key mapping FAQ key to answer)
        #[arg(long, default_value = "taylor_faqs.json")]
        faqs: PathBuf,
        /// Output embeddings file
        #[arg(long, default_value = "taylor_embeddings.json")]
        out: PathBuf,
    },
    /// Report which required environment variables are set
    CheckEnv,
}
