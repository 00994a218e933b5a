use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    /// Shop base URL. A bare host such as `store.myshopify.com` is accepted;
    /// `https://` is assumed when no scheme is given.
    pub shop_url: String,
    pub access_token: String,
    pub api_version: String,
    pub feed_path: PathBuf,
    pub profile_path: PathBuf,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub product_page_limit: u32,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("shop_url", &self.shop_url)
            .field("access_token", &"[redacted]")
            .field("api_version", &self.api_version)
            .field("feed_path", &self.feed_path)
            .field("profile_path", &self.profile_path)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("product_page_limit", &self.product_page_limit)
            .finish()
    }
}
