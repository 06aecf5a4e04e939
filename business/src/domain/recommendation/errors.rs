#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("recommendation.product_not_found")]
    ProductNotFound,
    #[error("recommendation.generation_failed: {0}")]
    GenerationFailed(String),
}
