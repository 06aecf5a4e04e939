use std::env;
use std::sync::Arc;

use business::domain::inventory::repository::KeyValueStore;
use persistence::db::{DEFAULT_MIGRATIONS_PATH, DatabaseConfig, connect_and_migrate};
use persistence::key_value::in_memory::InMemoryKeyValueStore;
use persistence::key_value::postgres::KeyValueStorePostgres;

/// Initialize the key-value store backing the inventory
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (optional; without it the
///   inventory lives in memory and is lost on restart)
/// - DATABASE_MIGRATIONS: migrations directory
///   (default: "./infrastructure/persistence/migrations")
///
/// # Errors
/// Returns error if the connection or the migrations fail
pub async fn init_storage() -> anyhow::Result<Arc<dyn KeyValueStore>> {
    let Ok(db_url) = env::var("DATABASE_URL") else {
        tracing::warn!("DATABASE_URL not set, inventory will be kept in memory only");
        return Ok(Arc::new(InMemoryKeyValueStore::new()));
    };

    let migrations =
        env::var("DATABASE_MIGRATIONS").unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());
    let config = DatabaseConfig::new(db_url).with_migrations_path(migrations);
    let pool = connect_and_migrate(&config).await?;

    Ok(Arc::new(KeyValueStorePostgres::new(pool)))
}
