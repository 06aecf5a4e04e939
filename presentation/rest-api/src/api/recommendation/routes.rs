use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::value_objects::ProductId;
use business::domain::recommendation::use_cases::generate::{
    GetRecommendationParams, GetRecommendationUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recommendation::dto::RecommendationResponse;
use crate::api::tags::ApiTags;

pub struct RecommendationApi {
    get_recommendation_use_case: Arc<dyn GetRecommendationUseCase>,
}

impl RecommendationApi {
    pub fn new(get_recommendation_use_case: Arc<dyn GetRecommendationUseCase>) -> Self {
        Self {
            get_recommendation_use_case,
        }
    }
}

/// Recommendation API
///
/// AI suggestions for what to do with stock before it spoils.
#[OpenApi]
impl RecommendationApi {
    /// Recommend an action for a product
    ///
    /// Asks the assistant whether to discount, donate or remove the product.
    #[oai(
        path = "/products/:id/recommendation",
        method = "get",
        tag = "ApiTags::Recommendations"
    )]
    async fn get_recommendation(&self, id: Path<String>) -> GetRecommendationResponse {
        let params = GetRecommendationParams {
            product_id: ProductId::new(id.0),
        };

        match self.get_recommendation_use_case.execute(params).await {
            Ok(recommendation) => GetRecommendationResponse::Ok(Json(recommendation.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetRecommendationResponse::NotFound(json),
                    502 => GetRecommendationResponse::BadGateway(json),
                    _ => GetRecommendationResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetRecommendationResponse {
    #[oai(status = 200)]
    Ok(Json<RecommendationResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
