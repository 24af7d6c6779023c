use clap::Parser;
use std::sync::Arc;
use taylorbot::cli::commands::{Cli, Commands};
use taylorbot::config::{self, Config};
use taylorbot::infrastructure::embeddings::openai::OpenAiEmbeddings;
use taylorbot::infrastructure::telegram::{self, TelegramClient};
use taylorbot::TaylorBot;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run_command(cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Run => {
            let config = Config::from_env()?;
            let bot = TaylorBot::from_config(&config)?;
            let client = Arc::new(TelegramClient::new(&config.telegram_bot_token));
            telegram::run_loop(client, bot.responder.clone()).await?;
            Ok(())
        }
        Commands::Ask { text, chat_id } => {
            let config = Config::from_env()?;
            let bot = TaylorBot::from_config(&config)?;
            let reply = bot.respond(chat_id, &text).await?;
            println!("{reply}");
            Ok(())
        }
        Commands::GenerateEmbeddings { faqs, out } => {
            let api_key = std::env::var("OPENAI_API_KEY")
                .map_err(|_| "missing required environment variable OPENAI_API_KEY")?;
            let model = std::env::var("TAYLOR_EMBEDDING_MODEL").ok();
            let embedder =
                OpenAiEmbeddings::new(api_key, model, std::time::Duration::from_secs(30));
            let count = taylorbot::generate_embeddings(&embedder, &faqs, &out).await?;
            println!("Embedded {count} FAQ entries into {}", out.display());
            Ok(())
        }
        Commands::CheckEnv => {
            let mut missing = false;
            for name in config::REQUIRED_VARS {
                match std::env::var(name) {
                    Ok(v) if !v.is_empty() => println!("✅ {name} is set"),
                    _ => {
                        println!("❌ {name} is missing");
                        missing = true;
                    }
                }
            }
            if missing {
                return Err("one or more required environment variables are not set".into());
            }
            println!("✅ Environment variables loaded successfully.");
            Ok(())
        }
    }
}
