use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::services::ExtractedProductInfo;

pub struct ExtractProductInfoParams {
    /// Label photo as a `data:<mime>;base64,<payload>` URI.
    pub image_data_uri: String,
}

#[async_trait]
pub trait ExtractProductInfoUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ExtractProductInfoParams,
    ) -> Result<ExtractedProductInfo, ProductError>;
}
