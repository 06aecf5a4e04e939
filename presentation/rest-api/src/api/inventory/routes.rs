use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::inventory::use_cases::get_stats::GetInventoryStatsUseCase;

use crate::api::inventory::dto::InventoryStatsResponse;
use crate::api::tags::ApiTags;

pub struct InventoryApi {
    get_stats_use_case: Arc<dyn GetInventoryStatsUseCase>,
}

impl InventoryApi {
    pub fn new(get_stats_use_case: Arc<dyn GetInventoryStatsUseCase>) -> Self {
        Self { get_stats_use_case }
    }
}

#[OpenApi]
impl InventoryApi {
    /// Inventory statistics
    ///
    /// Counts products by freshness status as of today.
    #[oai(path = "/inventory/stats", method = "get", tag = "ApiTags::Inventory")]
    async fn get_stats(&self) -> Json<InventoryStatsResponse> {
        Json(self.get_stats_use_case.execute().await.into())
    }
}
