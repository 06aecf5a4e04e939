use std::sync::Arc;

use async_trait::async_trait;

use crate::application::inventory::store::InventoryStore;
use crate::domain::logger::Logger;
use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::{Recommendation, RecommendationRequest};
use crate::domain::recommendation::services::RecommendationService;
use crate::domain::recommendation::use_cases::generate::{
    GetRecommendationParams, GetRecommendationUseCase,
};

pub struct GetRecommendationUseCaseImpl {
    pub store: Arc<InventoryStore>,
    pub recommender: Arc<dyn RecommendationService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRecommendationUseCase for GetRecommendationUseCaseImpl {
    async fn execute(
        &self,
        params: GetRecommendationParams,
    ) -> Result<Recommendation, RecommendationError> {
        let product = self
            .store
            .find(&params.product_id)
            .await
            .ok_or(RecommendationError::ProductNotFound)?;

        self.logger
            .info(&format!("Requesting recommendation for: {}", product.name));

        let request = RecommendationRequest::for_product(&product, self.store.today());
        let recommendation = self
            .recommender
            .recommend(&request)
            .await
            .inspect_err(|e| {
                self.logger
                    .error(&format!("Recommendation failed for {}: {}", product.id, e))
            })?;

        self.logger.info(&format!(
            "Recommendation for {}: {}",
            product.name, recommendation.suggested_action
        ));
        Ok(recommendation)
    }
}
