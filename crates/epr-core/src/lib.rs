mod app_config;
mod config;
mod results;
mod seller;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use results::CheckResult;
pub use seller::{ComplianceProfile, Seller, SellerId, ShippingChannelId, ShippingProfile};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
