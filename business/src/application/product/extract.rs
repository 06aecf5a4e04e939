use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::services::{ExtractedProductInfo, ProductExtractorService};
use crate::domain::product::use_cases::extract::{
    ExtractProductInfoParams, ExtractProductInfoUseCase,
};
use crate::domain::product::value_objects::LabelImage;

pub struct ExtractProductInfoUseCaseImpl {
    pub extractor: Arc<dyn ProductExtractorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ExtractProductInfoUseCase for ExtractProductInfoUseCaseImpl {
    async fn execute(
        &self,
        params: ExtractProductInfoParams,
    ) -> Result<ExtractedProductInfo, ProductError> {
        let image = LabelImage::from_data_uri(&params.image_data_uri)?;
        self.logger
            .info(&format!("Extracting product info from {} label", image.mime_type));

        match self.extractor.extract(&image).await {
            Ok(info) => {
                self.logger
                    .info(&format!("Label extracted: {}", info.product_name));
                Ok(info)
            }
            Err(e) => {
                self.logger.error(&format!("Label extraction failed: {}", e));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub Extractor {}

        #[async_trait]
        impl ProductExtractorService for Extractor {
            async fn extract(&self, image: &LabelImage) -> Result<ExtractedProductInfo, ProductError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn yogurt_label() -> ExtractedProductInfo {
        ExtractedProductInfo {
            product_name: "Greek Yogurt".to_string(),
            batch_id: "GY-2024-17".to_string(),
            mfg_date: "2024-06-01".to_string(),
            exp_date: "2024-06-21".to_string(),
        }
    }

    #[tokio::test]
    async fn should_return_fields_when_label_is_readable() {
        let mut extractor = MockExtractor::new();
        extractor
            .expect_extract()
            .withf(|image| image.mime_type == "image/jpeg" && image.data_base64 == "aGVsbG8=")
            .returning(|_| Ok(yogurt_label()));

        let use_case = ExtractProductInfoUseCaseImpl {
            extractor: Arc::new(extractor),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ExtractProductInfoParams {
                image_data_uri: "data:image/jpeg;base64,aGVsbG8=".to_string(),
            })
            .await;

        assert_eq!(result.unwrap(), yogurt_label());
    }

    #[tokio::test]
    async fn should_reject_malformed_image_without_calling_service() {
        let mut extractor = MockExtractor::new();
        extractor.expect_extract().never();

        let use_case = ExtractProductInfoUseCaseImpl {
            extractor: Arc::new(extractor),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ExtractProductInfoParams {
                image_data_uri: "not-a-data-uri".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::InvalidImage));
    }

    #[tokio::test]
    async fn should_surface_service_failure_with_reason() {
        let mut extractor = MockExtractor::new();
        extractor
            .expect_extract()
            .times(1)
            .returning(|_| Err(ProductError::ExtractionFailed("label unreadable".to_string())));

        let use_case = ExtractProductInfoUseCaseImpl {
            extractor: Arc::new(extractor),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ExtractProductInfoParams {
                image_data_uri: "data:image/png;base64,aGVsbG8=".to_string(),
            })
            .await;

        match result.unwrap_err() {
            ProductError::ExtractionFailed(reason) => assert_eq!(reason, "label unreadable"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
