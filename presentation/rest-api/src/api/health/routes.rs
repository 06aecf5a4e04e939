use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use business::application::inventory::store::InventoryStore;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// "healthy" once the persisted inventory has been read, "starting" before
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

/// Health API for liveness and readiness probes.
pub struct Api {
    store: Arc<InventoryStore>,
}

impl Api {
    pub fn new(store: Arc<InventoryStore>) -> Self {
        Self { store }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Reports whether the service is up and the inventory has been loaded
    /// from storage.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        let status = if self.store.is_loaded().await {
            "healthy"
        } else {
            "starting"
        };

        Json(HealthCheckResponse {
            status: status.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}
