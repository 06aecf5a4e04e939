use std::sync::Arc;

use async_trait::async_trait;

use crate::application::inventory::store::InventoryStore;
use crate::domain::logger::Logger;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub store: Arc<InventoryStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> bool {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        self.store.remove(&params.id).await
    }
}
