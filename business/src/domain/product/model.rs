use chrono::NaiveDate;

use super::errors::ProductError;
use super::status::{ProductStatus, classify_with_threshold, days_until_expiry};
use super::value_objects::ProductId;

/// A tracked perishable item. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub batch_id: String,
    pub quantity: u32,
    pub mfg_date: NaiveDate,
    pub exp_date: NaiveDate,
}

pub struct NewProductProps {
    pub name: String,
    pub batch_id: String,
    pub quantity: u32,
    pub mfg_date: NaiveDate,
    pub exp_date: NaiveDate,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if props.batch_id.trim().is_empty() {
            return Err(ProductError::BatchIdEmpty);
        }

        if props.quantity < 1 {
            return Err(ProductError::InvalidQuantity);
        }

        if props.exp_date <= props.mfg_date {
            return Err(ProductError::ExpiryNotAfterManufacture);
        }

        Ok(Self {
            id: ProductId::generate(),
            name: props.name.trim().to_string(),
            batch_id: props.batch_id.trim().to_string(),
            quantity: props.quantity,
            mfg_date: props.mfg_date,
            exp_date: props.exp_date,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        batch_id: String,
        quantity: u32,
        mfg_date: NaiveDate,
        exp_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name,
            batch_id,
            quantity,
            mfg_date,
            exp_date,
        }
    }

    pub fn status(&self, today: NaiveDate, threshold_days: i64) -> ProductStatus {
        classify_with_threshold(self.exp_date, today, threshold_days)
    }

    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        days_until_expiry(self.exp_date, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::status::NEAR_EXPIRY_THRESHOLD_DAYS;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn milk_props() -> NewProductProps {
        NewProductProps {
            name: "Milk".to_string(),
            batch_id: "B1".to_string(),
            quantity: 2,
            mfg_date: date(2024, 1, 1),
            exp_date: date(2024, 1, 10),
        }
    }

    #[test]
    fn should_create_product_when_props_are_valid() {
        let product = Product::new(milk_props()).unwrap();

        assert_eq!(product.name, "Milk");
        assert_eq!(product.batch_id, "B1");
        assert_eq!(product.quantity, 2);
        assert!(!product.id.as_str().is_empty());
    }

    #[test]
    fn should_trim_name_and_batch() {
        let product = Product::new(NewProductProps {
            name: "  Greek Yogurt ".to_string(),
            batch_id: " LOT-7 ".to_string(),
            ..milk_props()
        })
        .unwrap();

        assert_eq!(product.name, "Greek Yogurt");
        assert_eq!(product.batch_id, "LOT-7");
    }

    #[test]
    fn should_reject_blank_name() {
        let result = Product::new(NewProductProps {
            name: "   ".to_string(),
            ..milk_props()
        });
        assert!(matches!(result, Err(ProductError::NameEmpty)));
    }

    #[test]
    fn should_reject_empty_batch_id() {
        let result = Product::new(NewProductProps {
            batch_id: String::new(),
            ..milk_props()
        });
        assert!(matches!(result, Err(ProductError::BatchIdEmpty)));
    }

    #[test]
    fn should_reject_zero_quantity() {
        let result = Product::new(NewProductProps {
            quantity: 0,
            ..milk_props()
        });
        assert!(matches!(result, Err(ProductError::InvalidQuantity)));
    }

    #[test]
    fn should_reject_expiry_on_manufacture_day() {
        let result = Product::new(NewProductProps {
            exp_date: date(2024, 1, 1),
            ..milk_props()
        });
        assert!(matches!(result, Err(ProductError::ExpiryNotAfterManufacture)));
    }

    #[test]
    fn should_derive_status_from_expiry() {
        let product = Product::new(milk_props()).unwrap();

        assert_eq!(
            product.status(date(2024, 1, 5), NEAR_EXPIRY_THRESHOLD_DAYS),
            ProductStatus::NearExpiry
        );
        assert_eq!(
            product.status(date(2024, 1, 11), NEAR_EXPIRY_THRESHOLD_DAYS),
            ProductStatus::Expired
        );
        assert_eq!(product.days_until_expiry(date(2024, 1, 5)), 5);
    }
}
