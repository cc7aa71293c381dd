pub mod commands;

use clap::{Parser, Subcommand};
use std::sync::Arc;

use crate::config::{AppConfig, StoreBackend};
use crate::database::{ContactStore, DatabaseManager, MemoryContactStore, PgContactStore};

#[derive(Parser)]
#[command(name = "contacts-api")]
#[command(about = "Contacts API - authenticated address book server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve(commands::serve::ServeArgs),

    #[command(about = "Create the contacts table and indexes, then exit")]
    Migrate,

    #[command(about = "Issue a bearer token for a user id")]
    Token(commands::token::TokenArgs),
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = crate::config::config();
    tracing::info!("Starting in {:?} mode", config.environment);

    match cli.command {
        None => commands::serve::handle(commands::serve::ServeArgs::default(), config).await,
        Some(Commands::Serve(args)) => commands::serve::handle(args, config).await,
        Some(Commands::Migrate) => commands::migrate::handle(config).await,
        Some(Commands::Token(args)) => commands::token::handle(args, config),
    }
}

/// Build the configured store, creating the schema for PostgreSQL
pub async fn open_store(config: &AppConfig) -> anyhow::Result<Arc<dyn ContactStore>> {
    match config.database.backend {
        StoreBackend::Memory => {
            anyhow::ensure!(
                config.is_development(),
                "the in-memory store is only available in development; set DATABASE_URL"
            );
            tracing::warn!("Using in-memory contact store; data is lost on exit");
            Ok(Arc::new(MemoryContactStore::new()))
        }
        StoreBackend::Postgres => {
            let pool = DatabaseManager::connect(&config.database).await?;
            DatabaseManager::ensure_schema(&pool).await?;
            Ok(Arc::new(PgContactStore::new(pool)))
        }
    }
}
