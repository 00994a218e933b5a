//! Catalog snapshot: every product with its variants.

use feedsync_core::RemoteProduct;

use crate::error::ShopifyError;
use crate::pagination::extract_next_cursor;
use crate::types::ProductsResponse;

use super::ShopifyClient;
use super::MAX_PAGES;

impl ShopifyClient {
    /// Fetches one page of `products.json`.
    ///
    /// Returns the page plus the raw `Link` header for cursor extraction.
    ///
    /// # Errors
    ///
    /// - [`ShopifyError::UnexpectedStatus`] on any non-2xx status.
    /// - [`ShopifyError::Http`] on network or TLS failure.
    /// - [`ShopifyError::Deserialize`] if the body is not a products page.
    pub async fn fetch_products_page(
        &self,
        limit: u32,
        page_info: Option<&str>,
    ) -> Result<(ProductsResponse, Option<String>), ShopifyError> {
        let mut url = self.endpoint("products.json")?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        if let Some(cursor) = page_info {
            url.query_pairs_mut().append_pair("page_info", cursor);
        }

        let (body, link_header) = Self::send(self.client.get(url.clone()), &url).await?;
        let page = Self::decode::<ProductsResponse>(
            &body,
            &format!("products page from {}", self.shop_url),
        )?;
        Ok((page, link_header))
    }

    /// Fetches the full catalog by following `Link` cursors until no
    /// `rel="next"` remains.
    ///
    /// **All-or-nothing**: a failure on any page discards earlier pages. A
    /// partial snapshot would turn existing products into duplicate creates.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_products_page`].
    /// Returns [`ShopifyError::PaginationLimit`] past [`MAX_PAGES`] pages.
    pub async fn list_products(&self, limit: u32) -> Result<Vec<RemoteProduct>, ShopifyError> {
        let mut all_products: Vec<RemoteProduct> = Vec::new();
        let mut cursor: Option<String> = None;
        let mut page_count = 0usize;

        loop {
            page_count += 1;
            if page_count > MAX_PAGES {
                return Err(ShopifyError::PaginationLimit {
                    shop_url: self.shop_url.clone(),
                    max_pages: MAX_PAGES,
                });
            }

            let (page, link_header) = self.fetch_products_page(limit, cursor.as_deref()).await?;
            tracing::debug!(
                page = page_count,
                products = page.products.len(),
                "fetched products page"
            );
            all_products.extend(page.products.into_iter().map(RemoteProduct::from));

            cursor = extract_next_cursor(link_header.as_deref());
            if cursor.is_none() {
                break;
            }
        }

        Ok(all_products)
    }
}
