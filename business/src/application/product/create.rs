use std::sync::Arc;

use async_trait::async_trait;

use crate::application::inventory::store::InventoryStore;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub store: Arc<InventoryStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let product = self
            .store
            .add(NewProductProps {
                name: params.name,
                batch_id: params.batch_id,
                quantity: params.quantity,
                mfg_date: params.mfg_date,
                exp_date: params.exp_date,
            })
            .await
            .inspect_err(|e| self.logger.warn(&format!("Product rejected: {}", e)))?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::inventory::testing::{SilentLogger, date, store_on};

    fn use_case(store: Arc<InventoryStore>) -> CreateProductUseCaseImpl {
        CreateProductUseCaseImpl {
            store,
            logger: Arc::new(SilentLogger),
        }
    }

    fn milk_params() -> CreateProductParams {
        CreateProductParams {
            name: "Milk".to_string(),
            batch_id: "B1".to_string(),
            quantity: 2,
            mfg_date: date(2024, 1, 1),
            exp_date: date(2024, 1, 10),
        }
    }

    #[tokio::test]
    async fn should_create_product_when_fields_are_valid() {
        let store = store_on(date(2024, 1, 2));

        let result = use_case(store.clone()).execute(milk_params()).await;

        let product = result.unwrap();
        assert_eq!(product.name, "Milk");
        assert_eq!(store.stats().await.total, 1);
        assert_eq!(store.find(&product.id).await, Some(product));
    }

    #[tokio::test]
    async fn should_reject_product_when_batch_id_is_empty() {
        let store = store_on(date(2024, 1, 2));

        let result = use_case(store.clone())
            .execute(CreateProductParams {
                batch_id: "  ".to_string(),
                ..milk_params()
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::BatchIdEmpty));
        assert_eq!(store.stats().await.total, 0);
    }

    #[tokio::test]
    async fn should_reject_product_when_expiry_precedes_manufacture() {
        let store = store_on(date(2024, 1, 2));

        let result = use_case(store)
            .execute(CreateProductParams {
                mfg_date: date(2024, 2, 1),
                ..milk_params()
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::ExpiryNotAfterManufacture
        ));
    }
}
