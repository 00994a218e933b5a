use crate::app_config::AppConfig;
use crate::ConfigError;

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
/// Unlike [`load_app_config`], this does NOT load `.env` files. Use it in tests
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

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

    let shop_url = require("SHOP_URL")?;
    let access_token = require("SHOPIFY_ACCESS_TOKEN")?;

    let api_version = or_default("FEEDSYNC_API_VERSION", "2023-07");
    let feed_path = PathBuf::from(or_default("FEEDSYNC_FEED_PATH", "csv-input/visiotech.csv"));
    let profile_path = PathBuf::from(or_default("FEEDSYNC_PROFILE_PATH", "./config/profile.yaml"));
    let log_level = or_default("FEEDSYNC_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("FEEDSYNC_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("FEEDSYNC_USER_AGENT", "feedsync/0.1 (catalog-sync)");

    let product_page_limit = parse_u32("FEEDSYNC_PRODUCT_PAGE_LIMIT", "250")?;
    if product_page_limit == 0 || product_page_limit > 250 {
        return Err(ConfigError::InvalidEnvVar {
            var: "FEEDSYNC_PRODUCT_PAGE_LIMIT".to_string(),
            reason: format!("{product_page_limit} is outside 1..=250"),
        });
    }

    Ok(AppConfig {
        shop_url,
        access_token,
        api_version,
        feed_path,
        profile_path,
        log_level,
        request_timeout_secs,
        user_agent,
        product_page_limit,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
