#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.batch_id_empty")]
    BatchIdEmpty,
    #[error("product.invalid_quantity")]
    InvalidQuantity,
    #[error("product.expiry_not_after_manufacture")]
    ExpiryNotAfterManufacture,
    #[error("product.invalid_image")]
    InvalidImage,
    #[error("product.extraction_failed: {0}")]
    ExtractionFailed(String),
}
