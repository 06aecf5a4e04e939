pub mod app_config;
pub mod cors_config;
pub mod database_config;
pub mod inventory_config;
pub mod openai_config;
pub mod server_config;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}
