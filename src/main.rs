//! Hylle CLI entry point.

use anyhow::Result;
use clap::Parser;
use hylle::cli::{commands, Cli, Commands};
use hylle::config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("hylle={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(Some(&std::path::PathBuf::from(path)))?,
        None => Settings::load()?,
    };

    // Execute command
    match &cli.command {
        Commands::Ask {
            question,
            model,
            limit,
            offline,
        } => {
            commands::run_ask(question, model.clone(), *limit, *offline, settings).await?;
        }

        Commands::Chat { model } => {
            commands::run_chat(model.clone(), settings).await?;
        }

        Commands::Book { query } => {
            commands::run_book(query, settings).await?;
        }

        Commands::Author { name, limit } => {
            commands::run_author(name, *limit, settings).await?;
        }

        Commands::Similar { terms, limit } => {
            commands::run_similar(terms, *limit, settings).await?;
        }

        Commands::Doctor => {
            commands::run_doctor(&settings)?;
        }

        Commands::Config { action } => {
            commands::run_config(action, settings)?;
        }
    }

    Ok(())
}
