use std::env;

use business::domain::product::status::NEAR_EXPIRY_THRESHOLD_DAYS;

use super::ConfigError;

/// Inventory classification settings.
///
/// Environment variables:
/// - INVENTORY_NEAR_EXPIRY_DAYS: days before expiry a product counts as
///   near expiry (default: 7)
#[derive(Debug, Clone)]
pub struct InventoryConfig {
    pub near_expiry_threshold_days: i64,
}

impl InventoryConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(env::var("INVENTORY_NEAR_EXPIRY_DAYS").ok())
    }

    fn from_value(raw: Option<String>) -> Result<Self, ConfigError> {
        let near_expiry_threshold_days = match raw {
            None => NEAR_EXPIRY_THRESHOLD_DAYS,
            Some(value) => value
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|days| *days >= 0)
                .ok_or(ConfigError::Invalid {
                    name: "INVENTORY_NEAR_EXPIRY_DAYS",
                    value,
                })?,
        };

        Ok(Self {
            near_expiry_threshold_days,
        })
    }
}
