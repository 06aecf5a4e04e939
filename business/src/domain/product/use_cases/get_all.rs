use async_trait::async_trait;

use crate::domain::inventory::model::ClassifiedProduct;

#[derive(Default)]
pub struct GetAllProductsParams {
    /// Restrict the listing to near-expiry products.
    pub near_expiry_only: bool,
}

/// Lists products soonest expiry first, each classified as of today.
#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllProductsParams) -> Vec<ClassifiedProduct>;
}
