use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;

pub const DEFAULT_MIGRATIONS_PATH: &str = "./infrastructure/persistence/migrations";

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error: {0}")]
    ConnectionError(String),
    #[error("database.migration_error: {0}")]
    MigrationError(String),
}

/// Connection settings for the Postgres-backed key-value store.
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub migrations_path: String,
}

impl DatabaseConfig {
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
            migrations_path: DEFAULT_MIGRATIONS_PATH.to_string(),
        }
    }

    pub fn with_migrations_path(mut self, path: impl Into<String>) -> Self {
        self.migrations_path = path.into();
        self
    }
}

pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))
}

/// Applies pending migrations from `migrations_path`.
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);
    if !path.exists() {
        return Err(DatabaseError::MigrationError(format!(
            "migrations directory not found: {}",
            migrations_path
        )));
    }

    sqlx::migrate::Migrator::new(path)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?
        .run(pool)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;

    tracing::info!(path = migrations_path, "database migrations applied");
    Ok(())
}

/// Opens a pool and brings the schema up to date.
pub async fn connect_and_migrate(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = create_postgres_pool(config).await?;
    run_migrations(&pool, &config.migrations_path).await?;
    Ok(pool)
}
