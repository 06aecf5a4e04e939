use std::sync::Arc;

use async_trait::async_trait;

use crate::application::inventory::store::InventoryStore;
use crate::domain::logger::Logger;
use crate::domain::product::use_cases::clear::ClearInventoryUseCase;

pub struct ClearInventoryUseCaseImpl {
    pub store: Arc<InventoryStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearInventoryUseCase for ClearInventoryUseCaseImpl {
    async fn execute(&self) {
        self.logger.info("Clearing inventory");
        self.store.clear().await;
    }
}
