use async_trait::async_trait;

#[async_trait]
pub trait ClearInventoryUseCase: Send + Sync {
    async fn execute(&self);
}
