use std::sync::Arc;

use async_trait::async_trait;

use crate::application::inventory::store::InventoryStore;
use crate::domain::inventory::model::ClassifiedProduct;
use crate::domain::logger::Logger;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};

pub struct GetAllProductsUseCaseImpl {
    pub store: Arc<InventoryStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Vec<ClassifiedProduct> {
        // One reference date for both the filter and the labels.
        let today = self.store.today();
        let products = if params.near_expiry_only {
            self.logger.info("Fetching near-expiry products");
            self.store.near_expiry_products(today).await
        } else {
            self.logger.info("Fetching all products");
            self.store.products_by_expiry().await
        };

        let threshold = self.store.near_expiry_threshold_days();
        let classified: Vec<ClassifiedProduct> = products
            .into_iter()
            .map(|p| ClassifiedProduct::new(p, today, threshold))
            .collect();

        self.logger
            .info(&format!("Found {} products", classified.len()));
        classified
    }
}
