use crate::app_config::AppConfig;
use crate::ConfigError;

const DEFAULT_MVM_API_BASE_URL: &str = "https://mvmapi.webkul.com/api/v2/";

// Custom-field ids of the marketplace instance the bot was first deployed
// against. Any other instance must override both.
const DEFAULT_FR_EPR_REG_NUMBER_CUSTOM_FIELD_ID: &str = "22305";
const DEFAULT_DE_LUCID_REG_NUMBER_CUSTOM_FIELD_ID: &str = "22316";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Parsing and validation live here, decoupled from the process environment,
/// so tests can drive it with a plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let positive_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let value = parse_u32(var, default)?;
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(value)
    };

    let mvm_api_bearer_token = require("MVM_API_BEARER_TOKEN")?;
    let mvm_api_base_url = or_default("MVM_API_BASE_URL", DEFAULT_MVM_API_BASE_URL);

    let fr_epr_reg_number_custom_field_id = parse_u64(
        "FR_EPR_REG_NUMBER_CUSTOM_FIELD_ID",
        DEFAULT_FR_EPR_REG_NUMBER_CUSTOM_FIELD_ID,
    )?;
    let de_lucid_reg_number_custom_field_id = parse_u64(
        "DE_LUCID_REG_NUMBER_CUSTOM_FIELD_ID",
        DEFAULT_DE_LUCID_REG_NUMBER_CUSTOM_FIELD_ID,
    )?;

    let log_level = or_default("EPR_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("EPR_REQUEST_TIMEOUT_SECS", "30")?;
    let max_retries = parse_u32("EPR_MAX_RETRIES", "5")?;
    let retry_backoff_base_ms = parse_u64("EPR_RETRY_BACKOFF_BASE_MS", "250")?;
    let inter_request_delay_ms = parse_u64("EPR_INTER_REQUEST_DELAY_MS", "0")?;
    let page_size = positive_u32("EPR_PAGE_SIZE", "100")?;
    let max_pages = positive_u32("EPR_MAX_PAGES", "50")?;

    Ok(AppConfig {
        mvm_api_bearer_token,
        mvm_api_base_url,
        fr_epr_reg_number_custom_field_id,
        de_lucid_reg_number_custom_field_id,
        log_level,
        request_timeout_secs,
        max_retries,
        retry_backoff_base_ms,
        inter_request_delay_ms,
        page_size,
        max_pages,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
