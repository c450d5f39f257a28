//! Skill Swap Recommender
//!
//! Entry point: builds artifacts, answers one-shot queries, or serves the
//! HTTP API.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;
use skill_swap_recommender::commands;
use skill_swap_recommender::config::{AppConfig, Cli, Command};
use skill_swap_recommender::recommender::telemetry;
use skill_swap_recommender::server::start_server;

#[tokio::main]
async fn main() {
    // Load .env (if present)
    let _ = dotenv();

    let cli = Cli::parse();
    let config = match AppConfig::from_cli(&cli) {
        Ok(c) => Arc::new(c),
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing (M-LOG-STRUCTURED)
    telemetry::init(config.telemetry.log_format);

    let result = match cli.command.clone().unwrap_or(Command::Serve) {
        Command::Serve => start_server(Arc::clone(&config)).await,
        Command::Build {
            grouping,
            allow_duplicates,
        } => commands::build(&config, grouping.as_deref(), allow_duplicates)
            .await
            .map(|_| ()),
        Command::Recommend { top_n, skills } => {
            commands::recommend_once(&config, top_n, skills)
                .await
                .and_then(|response| {
                    println!("{}", serde_json::to_string_pretty(&response)?);
                    Ok(())
                })
        }
    };

    if let Err(e) = result {
        tracing::error!(error = ?e, "Command failed");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
