use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::recommendation::errors::RecommendationError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for RecommendationError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            RecommendationError::ProductNotFound => (StatusCode::NOT_FOUND, "NotFoundError"),
            RecommendationError::GenerationFailed(_) => {
                (StatusCode::BAD_GATEWAY, "RecommendationError")
            }
        };

        (status, Json(ErrorResponse::new(name, self.to_string())))
    }
}
