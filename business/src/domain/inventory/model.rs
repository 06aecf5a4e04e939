use chrono::NaiveDate;

use crate::domain::product::model::Product;
use crate::domain::product::status::ProductStatus;

/// A product together with its freshness as of a given day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedProduct {
    pub product: Product,
    pub status: ProductStatus,
    pub days_until_expiry: i64,
}

impl ClassifiedProduct {
    pub fn new(product: Product, today: NaiveDate, threshold_days: i64) -> Self {
        Self {
            status: product.status(today, threshold_days),
            days_until_expiry: product.days_until_expiry(today),
            product,
        }
    }

    /// Only near-expiry stock is offered an AI recommendation.
    pub fn recommendation_available(&self) -> bool {
        self.status == ProductStatus::NearExpiry
    }
}

/// Aggregate counts over the live collection. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventoryStats {
    pub total: usize,
    pub valid: usize,
    pub near_expiry: usize,
    pub expired: usize,
    /// Products ready to hand over for donation. Currently every near-expiry
    /// product counts, so this always equals `near_expiry`.
    pub donation_ready: usize,
}

impl InventoryStats {
    pub fn from_products(products: &[Product], today: NaiveDate, threshold_days: i64) -> Self {
        let mut stats = Self {
            total: products.len(),
            ..Self::default()
        };

        for product in products {
            match product.status(today, threshold_days) {
                ProductStatus::Valid => stats.valid += 1,
                ProductStatus::NearExpiry => stats.near_expiry += 1,
                ProductStatus::Expired => stats.expired += 1,
            }
        }

        stats.donation_ready = stats.near_expiry;
        stats
    }
}
