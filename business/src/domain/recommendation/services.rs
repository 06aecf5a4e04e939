use async_trait::async_trait;

use super::errors::RecommendationError;
use super::model::{Recommendation, RecommendationRequest};

/// Service port for suggesting what to do with stock nearing its expiry date.
///
/// Implementations make a single attempt; failures surface as
/// [`RecommendationError::GenerationFailed`] with a readable reason.
#[async_trait]
pub trait RecommendationService: Send + Sync {
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Recommendation, RecommendationError>;
}
