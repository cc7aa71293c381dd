use crate::config::{AppConfig, StoreBackend};
use crate::database::DatabaseManager;

pub async fn handle(config: &AppConfig) -> anyhow::Result<()> {
    if config.database.backend == StoreBackend::Memory {
        anyhow::bail!("nothing to migrate for the in-memory store; set DATABASE_URL");
    }

    let pool = DatabaseManager::connect(&config.database).await?;
    DatabaseManager::ensure_schema(&pool).await?;
    pool.close().await;

    println!("Contacts schema is up to date");
    Ok(())
}
