use poem_openapi::Object;

use business::domain::inventory::model::InventoryStats;

/// Inventory counters for the dashboard cards.
#[derive(Debug, Clone, Object)]
pub struct InventoryStatsResponse {
    pub total: usize,
    pub valid: usize,
    pub near_expiry: usize,
    pub expired: usize,
    /// Products that can be handed over for donation
    pub donation_ready: usize,
}

impl From<InventoryStats> for InventoryStatsResponse {
    fn from(stats: InventoryStats) -> Self {
        Self {
            total: stats.total,
            valid: stats.valid,
            near_expiry: stats.near_expiry,
            expired: stats.expired,
            donation_ready: stats.donation_ready,
        }
    }
}
