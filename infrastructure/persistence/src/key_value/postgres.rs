use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::inventory::repository::KeyValueStore;

use super::entity::KeyValueEntity;

/// Key-value store backed by the `key_value_store` table.
pub struct KeyValueStorePostgres {
    pool: PgPool,
}

impl KeyValueStorePostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeyValueStore for KeyValueStorePostgres {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let entity = sqlx::query_as::<_, KeyValueEntity>(
            "SELECT key, value, updated_at FROM key_value_store WHERE key = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(key = key, error = %e, "key-value read failed");
            RepositoryError::ReadFailed
        })?;

        if let Some(entity) = &entity {
            tracing::debug!(key = key, updated_at = %entity.updated_at, "key-value read");
        }

        Ok(entity.map(|e| e.value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO key_value_store (key, value, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (key) DO UPDATE SET
                value = EXCLUDED.value,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(key = key, error = %e, "key-value write failed");
            RepositoryError::WriteFailed
        })?;

        Ok(())
    }
}
