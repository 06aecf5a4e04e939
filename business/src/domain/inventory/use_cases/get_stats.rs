use async_trait::async_trait;

use crate::domain::inventory::model::InventoryStats;

#[async_trait]
pub trait GetInventoryStatsUseCase: Send + Sync {
    async fn execute(&self) -> InventoryStats;
}
