//! HTTP client for the Shopify Admin API (REST plus GraphQL).

mod graphql;
mod list;
mod write;

use std::time::Duration;

use feedsync_core::AppConfig;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::ShopifyError;

/// Maximum number of pages to fetch before returning an error.
/// Prevents infinite loops on cycling cursors.
pub(super) const MAX_PAGES: usize = 200;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Authenticated client for one shop.
///
/// Every call is a single request: there is no retry and no concurrency.
/// Non-2xx responses become [`ShopifyError::UnexpectedStatus`] carrying the
/// response body so callers can log what the API said.
pub struct ShopifyClient {
    pub(super) client: Client,
    /// `{origin}/admin/api/{version}/`, always with a trailing slash.
    pub(super) admin_base: Url,
    pub(super) shop_url: String,
}

impl ShopifyClient {
    /// Creates a client for `shop_url` (bare domain or full URL) pinned to
    /// `api_version`.
    ///
    /// # Errors
    ///
    /// - [`ShopifyError::InvalidShopUrl`] if `shop_url` cannot form an Admin API base.
    /// - [`ShopifyError::InvalidAccessToken`] if the token is not a valid header value.
    /// - [`ShopifyError::Http`] if the underlying `reqwest::Client` cannot be built.
    pub fn new(
        shop_url: &str,
        access_token: &str,
        api_version: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ShopifyError> {
        let admin_base = Self::admin_base(shop_url, api_version)?;

        let mut token =
            HeaderValue::from_str(access_token).map_err(|_| ShopifyError::InvalidAccessToken)?;
        token.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(ACCESS_TOKEN_HEADER, token);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            admin_base,
            shop_url: shop_url.to_owned(),
        })
    }

    /// Builds a client from the loaded application config.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ShopifyError> {
        Self::new(
            &config.shop_url,
            &config.access_token,
            &config.api_version,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Resolves the Admin API base URL. A shop given without a scheme is
    /// assumed to be HTTPS; any path on it is discarded.
    fn admin_base(shop_url: &str, api_version: &str) -> Result<Url, ShopifyError> {
        let invalid = |reason: String| ShopifyError::InvalidShopUrl {
            shop_url: shop_url.to_owned(),
            reason,
        };

        let trimmed = shop_url.trim();
        if trimmed.is_empty() {
            return Err(invalid("shop URL is empty".to_owned()));
        }
        let with_scheme = if trimmed.contains("://") {
            trimmed.to_owned()
        } else {
            format!("https://{trimmed}")
        };

        let parsed = Url::parse(&with_scheme).map_err(|e| invalid(e.to_string()))?;
        if parsed.host_str().is_none() {
            return Err(invalid("no host".to_owned()));
        }

        let version = api_version.trim().trim_matches('/');
        if version.is_empty() {
            return Err(invalid("API version is empty".to_owned()));
        }

        parsed
            .join(&format!("/admin/api/{version}/"))
            .map_err(|e| invalid(e.to_string()))
    }

    /// Resolves `path` (e.g. `"products.json"`) against the Admin API base.
    pub(super) fn endpoint(&self, path: &str) -> Result<Url, ShopifyError> {
        self.admin_base
            .join(path)
            .map_err(|e| ShopifyError::InvalidShopUrl {
                shop_url: self.shop_url.clone(),
                reason: format!("cannot join \"{path}\": {e}"),
            })
    }

    /// Sends `request` and returns the status-checked body text plus the
    /// `Link` header, if any.
    pub(super) async fn send(
        request: RequestBuilder,
        url: &Url,
    ) -> Result<(String, Option<String>), ShopifyError> {
        let response = request.send().await?;
        let status = response.status();

        let link_header = response
            .headers()
            .get(reqwest::header::LINK)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = response.text().await?;
        if !status.is_success() {
            return Err(ShopifyError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }
        Ok((body, link_header))
    }

    pub(super) fn decode<T: DeserializeOwned>(body: &str, context: &str) -> Result<T, ShopifyError> {
        serde_json::from_str(body).map_err(|e| ShopifyError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
