use async_trait::async_trait;

use crate::domain::product::value_objects::ProductId;

pub struct DeleteProductParams {
    pub id: ProductId,
}

/// Removing an unknown id is a no-op; the result says whether anything
/// was removed.
#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> bool;
}
