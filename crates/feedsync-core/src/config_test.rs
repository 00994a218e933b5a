use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated with valid values.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("SHOP_URL", "example-store.myshopify.com");
    m.insert("SHOPIFY_ACCESS_TOKEN", "shpat_test");
    m
}

#[test]
fn build_app_config_fails_without_shop_url() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "SHOP_URL"),
        "expected MissingEnvVar(SHOP_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_without_access_token() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("SHOP_URL", "example-store.myshopify.com");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "SHOPIFY_ACCESS_TOKEN"),
        "expected MissingEnvVar(SHOPIFY_ACCESS_TOKEN), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_token_as_missing() {
    let mut map = full_env();
    map.insert("SHOPIFY_ACCESS_TOKEN", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "SHOPIFY_ACCESS_TOKEN"));
}

#[test]
fn build_app_config_succeeds_with_all_required_vars() {
    let map = full_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.shop_url, "example-store.myshopify.com");
    assert_eq!(cfg.access_token, "shpat_test");
    assert_eq!(cfg.api_version, "2023-07");
    assert_eq!(cfg.feed_path.to_str(), Some("csv-input/visiotech.csv"));
    assert_eq!(cfg.profile_path.to_str(), Some("./config/profile.yaml"));
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "feedsync/0.1 (catalog-sync)");
    assert_eq!(cfg.product_page_limit, 250);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = full_env();
    map.insert("FEEDSYNC_API_VERSION", "2024-01");
    map.insert("FEEDSYNC_FEED_PATH", "/tmp/feed.csv");
    map.insert("FEEDSYNC_REQUEST_TIMEOUT_SECS", "60");
    map.insert("FEEDSYNC_PRODUCT_PAGE_LIMIT", "50");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_version, "2024-01");
    assert_eq!(cfg.feed_path.to_str(), Some("/tmp/feed.csv"));
    assert_eq!(cfg.request_timeout_secs, 60);
    assert_eq!(cfg.product_page_limit, 50);
}

#[test]
fn build_app_config_rejects_invalid_timeout() {
    let mut map = full_env();
    map.insert("FEEDSYNC_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FEEDSYNC_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(FEEDSYNC_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_page_limit_above_shopify_maximum() {
    let mut map = full_env();
    map.insert("FEEDSYNC_PRODUCT_PAGE_LIMIT", "251");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FEEDSYNC_PRODUCT_PAGE_LIMIT")
    );
}

#[test]
fn debug_output_redacts_access_token() {
    let cfg = build_app_config(lookup_from_map(&full_env())).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("shpat_test"));
    assert!(rendered.contains("[redacted]"));
}
