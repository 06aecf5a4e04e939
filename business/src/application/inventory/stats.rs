use std::sync::Arc;

use async_trait::async_trait;

use crate::application::inventory::store::InventoryStore;
use crate::domain::inventory::model::InventoryStats;
use crate::domain::inventory::use_cases::get_stats::GetInventoryStatsUseCase;
use crate::domain::logger::Logger;

pub struct GetInventoryStatsUseCaseImpl {
    pub store: Arc<InventoryStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetInventoryStatsUseCase for GetInventoryStatsUseCaseImpl {
    async fn execute(&self) -> InventoryStats {
        let stats = self.store.stats().await;
        self.logger.debug(&format!(
            "Inventory stats: total={} valid={} near_expiry={} expired={}",
            stats.total, stats.valid, stats.near_expiry, stats.expired
        ));
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::inventory::testing::{SilentLogger, date, product_expiring, store_on};

    #[tokio::test]
    async fn should_keep_totals_consistent_with_collection() {
        let store = store_on(date(2024, 6, 10));
        let use_case = GetInventoryStatsUseCaseImpl {
            store: store.clone(),
            logger: Arc::new(SilentLogger),
        };

        let mut ids = Vec::new();
        for (i, exp) in [date(2024, 6, 9), date(2024, 6, 11), date(2024, 6, 30), date(2024, 6, 16)]
            .into_iter()
            .enumerate()
        {
            let product = store
                .add(product_expiring(&format!("item-{}", i), exp))
                .await
                .unwrap();
            ids.push(product.id);

            let stats = use_case.execute().await;
            assert_eq!(stats.total, store.products().await.len());
            assert_eq!(stats.total, stats.valid + stats.near_expiry + stats.expired);
            assert_eq!(stats.donation_ready, stats.near_expiry);
        }

        store.remove(&ids[1]).await;
        let stats = use_case.execute().await;
        assert_eq!(stats.total, 3);
        assert_eq!(stats.near_expiry, 1);
        assert_eq!(stats.donation_ready, 1);
        assert_eq!(stats.expired, 1);
        assert_eq!(stats.valid, 1);
    }
}
