#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use configs::DatabaseConfig;
use models::db::{connect_with_config, DATABASE_URL};

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<Result<(), String>> = OnceCell::const_new();

fn test_config() -> DatabaseConfig {
    let mut cfg = DatabaseConfig { url: DATABASE_URL.clone(), ..DatabaseConfig::default() };
    cfg.min_connections = 1;
    cfg.connect_timeout_secs = 5;
    cfg.acquire_timeout_secs = 10;
    cfg
}

pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    // Run migrations exactly once, with a throwaway connection
    let migrated = MIGRATED
        .get_or_init(|| async {
            let db = connect_with_config(&test_config()).await.map_err(|e| e.to_string())?;
            migration::Migrator::up(&db, None).await.map_err(|e| e.to_string())?;
            Ok(())
        })
        .await;
    if let Err(e) = migrated {
        return Err(anyhow::anyhow!("database unavailable: {e}"));
    }

    // Return a fresh connection for the current test's runtime
    connect_with_config(&test_config()).await
}
