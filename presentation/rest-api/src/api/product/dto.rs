use chrono::NaiveDate;
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::inventory::model::ClassifiedProduct;
use business::domain::product::model::Product;
use business::domain::product::services::ExtractedProductInfo;
use business::domain::product::status::ProductStatus;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum ProductStatusDto {
    #[oai(rename = "valid")]
    Valid,
    #[oai(rename = "near_expiry")]
    NearExpiry,
    #[oai(rename = "expired")]
    Expired,
}

impl From<ProductStatus> for ProductStatusDto {
    fn from(status: ProductStatus) -> Self {
        match status {
            ProductStatus::Valid => ProductStatusDto::Valid,
            ProductStatus::NearExpiry => ProductStatusDto::NearExpiry,
            ProductStatus::Expired => ProductStatusDto::Expired,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Supplier or production batch reference (cannot be empty)
    pub batch_id: String,
    /// Units in stock (at least 1)
    pub quantity: u32,
    /// Manufacturing date
    pub mfg_date: NaiveDate,
    /// Expiry date (must be after the manufacturing date)
    pub exp_date: NaiveDate,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    pub name: String,
    pub batch_id: String,
    pub quantity: u32,
    pub mfg_date: NaiveDate,
    pub exp_date: NaiveDate,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            batch_id: product.batch_id,
            quantity: product.quantity,
            mfg_date: product.mfg_date,
            exp_date: product.exp_date,
        }
    }
}

/// A product as listed in the inventory, classified as of today.
#[derive(Debug, Clone, Object)]
pub struct InventoryItemResponse {
    #[oai(flatten)]
    pub product: ProductResponse,
    /// Freshness status
    pub status: ProductStatusDto,
    /// Days until expiry; 0 when expiring today, negative once expired
    pub days_until_expiry: i64,
    /// Whether an AI recommendation is offered for this product
    pub recommendation_available: bool,
}

impl From<ClassifiedProduct> for InventoryItemResponse {
    fn from(item: ClassifiedProduct) -> Self {
        let recommendation_available = item.recommendation_available();
        Self {
            status: item.status.into(),
            days_until_expiry: item.days_until_expiry,
            recommendation_available,
            product: item.product.into(),
        }
    }
}

// --- DTOs for label extraction ---

#[derive(Debug, Clone, Object)]
pub struct ExtractProductInfoRequest {
    /// Label photo as a data URI: `data:<mimetype>;base64,<encoded_data>`
    pub image_data_uri: String,
}

#[derive(Debug, Clone, Object)]
pub struct ExtractedProductInfoResponse {
    pub product_name: String,
    pub batch_id: String,
    /// Manufacturing date as read from the label (YYYY-MM-DD)
    pub mfg_date: String,
    /// Expiry date as read from the label (YYYY-MM-DD)
    pub exp_date: String,
}

impl From<ExtractedProductInfo> for ExtractedProductInfoResponse {
    fn from(info: ExtractedProductInfo) -> Self {
        Self {
            product_name: info.product_name,
            batch_id: info.batch_id,
            mfg_date: info.mfg_date,
            exp_date: info.exp_date,
        }
    }
}
