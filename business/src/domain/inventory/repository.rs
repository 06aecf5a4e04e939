use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

/// Key under which the serialized product list is stored.
pub const INVENTORY_STORAGE_KEY: &str = "inventory";

/// String-valued key-value store used as the inventory's durability sink.
///
/// `get` returns `Ok(None)` for a key that was never written.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError>;
}
