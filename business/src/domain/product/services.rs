use async_trait::async_trait;

use super::errors::ProductError;
use super::value_objects::LabelImage;

/// Fields read off a product label.
///
/// Dates are kept as the `YYYY-MM-DD` strings the service returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedProductInfo {
    pub product_name: String,
    pub batch_id: String,
    pub mfg_date: String,
    pub exp_date: String,
}

/// Service port for reading structured product fields from a label image.
#[async_trait]
pub trait ProductExtractorService: Send + Sync {
    async fn extract(&self, image: &LabelImage) -> Result<ExtractedProductInfo, ProductError>;
}
