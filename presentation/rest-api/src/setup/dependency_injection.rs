use std::sync::Arc;

use logger::{TracingLogger, TracingNotifier};

use openai::action_recommender::ActionRecommenderOpenAI;
use openai::client::OpenAIClient;
use openai::label_extractor::LabelExtractorOpenAI;

use business::application::inventory::stats::GetInventoryStatsUseCaseImpl;
use business::application::inventory::store::InventoryStore;
use business::application::product::clear::ClearInventoryUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::extract::ExtractProductInfoUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::recommendation::generate::GetRecommendationUseCaseImpl;
use business::domain::clock::SystemClock;
use business::domain::inventory::repository::KeyValueStore;

use crate::api::health::routes::Api as HealthApi;
use crate::api::inventory::routes::InventoryApi;
use crate::api::product::routes::ProductApi;
use crate::api::recommendation::routes::RecommendationApi;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub inventory_api: InventoryApi,
    pub recommendation_api: RecommendationApi,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig, storage: Arc<dyn KeyValueStore>) -> Self {
        let logger = Arc::new(TracingLogger);

        let store = Arc::new(
            InventoryStore::new(
                storage,
                Arc::new(TracingNotifier),
                Arc::new(SystemClock),
                logger.clone(),
            )
            .with_near_expiry_threshold(config.inventory.near_expiry_threshold_days),
        );
        store.load().await;

        // Infrastructure adapters
        let label_extractor = Arc::new(LabelExtractorOpenAI::new(
            OpenAIClient::new(config.openai.api_key.clone()).with_model(&config.openai.model),
        ));
        let action_recommender = Arc::new(ActionRecommenderOpenAI::new(
            OpenAIClient::new(config.openai.api_key.clone()).with_model(&config.openai.model),
        ));

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let clear_use_case = Arc::new(ClearInventoryUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let extract_use_case = Arc::new(ExtractProductInfoUseCaseImpl {
            extractor: label_extractor,
            logger: logger.clone(),
        });

        // Inventory use cases
        let get_stats_use_case = Arc::new(GetInventoryStatsUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });

        // Recommendation use cases
        let get_recommendation_use_case = Arc::new(GetRecommendationUseCaseImpl {
            store: store.clone(),
            recommender: action_recommender,
            logger,
        });

        Self {
            health_api: HealthApi::new(store),
            product_api: ProductApi::new(
                create_use_case,
                get_all_use_case,
                delete_use_case,
                clear_use_case,
                extract_use_case,
            ),
            inventory_api: InventoryApi::new(get_stats_use_case),
            recommendation_api: RecommendationApi::new(get_recommendation_use_case),
        }
    }
}
