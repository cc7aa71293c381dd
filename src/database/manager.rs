use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors from the contact store and its connection management
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

const CREATE_CONTACTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS contacts (
        id          UUID PRIMARY KEY,
        owner       UUID NOT NULL,
        name        TEXT NOT NULL CHECK (name <> ''),
        email       TEXT,
        phone       TEXT,
        address     TEXT,
        city        TEXT,
        state       TEXT,
        country     TEXT,
        postal_code TEXT,
        created_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
        seq         BIGSERIAL NOT NULL
    )
"#;

const CREATE_OWNER_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS contacts_owner_created_at_seq_idx
        ON contacts (owner, created_at DESC, seq DESC)
"#;

/// Builds the PostgreSQL pool and owns the contacts schema
pub struct DatabaseManager;

impl DatabaseManager {
    /// Connect a pool using the configured URL and limits
    pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
        let url = config
            .url
            .as_deref()
            .ok_or(DatabaseError::ConfigMissing("DATABASE_URL"))?;

        let display_url = Self::redact_url(url)?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(url)
            .await
            .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

        info!("Created database pool for: {}", display_url);
        Ok(pool)
    }

    /// Create the contacts table and its owner index if absent
    pub async fn ensure_schema(pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query(CREATE_CONTACTS_TABLE).execute(pool).await?;
        sqlx::query(CREATE_OWNER_INDEX).execute(pool).await?;
        info!("Contacts schema is up to date");
        Ok(())
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }

    /// Database URL with the password masked, safe to log
    fn redact_url(raw: &str) -> Result<String, DatabaseError> {
        let mut url = url::Url::parse(raw).map_err(|_| DatabaseError::InvalidDatabaseUrl)?;
        if url.password().is_some() {
            url.set_password(Some("***"))
                .map_err(|_| DatabaseError::InvalidDatabaseUrl)?;
        }
        Ok(url.into())
    }
}
