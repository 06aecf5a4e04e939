use async_trait::async_trait;

use crate::domain::product::value_objects::ProductId;
use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::Recommendation;

pub struct GetRecommendationParams {
    pub product_id: ProductId,
}

#[async_trait]
pub trait GetRecommendationUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetRecommendationParams,
    ) -> Result<Recommendation, RecommendationError>;
}
