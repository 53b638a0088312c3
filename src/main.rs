mod config;
mod db;
mod import;
mod models;
mod report;
mod run;
mod web;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // A missing .env is fine; the environment may already carry everything.
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("obra=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = config::Config::from_env()?;
    let db = config
        .database
        .open()
        .with_context(|| format!("Failed to open database at {}", config.database))?;
    tracing::debug!(database = %config.database, "database ready");

    match args.len() {
        1 => run::as_server(&config, db),
        2.. => run::as_cli(&args, &config, db),
        _ => {
            eprintln!("Usage: obra [command]");
            Ok(())
        }
    }
}
