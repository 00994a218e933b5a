//! REST writes: product creation and variant updates.

use feedsync_core::{CreatedProduct, NewProduct, VariantUpdate};

use crate::error::ShopifyError;
use crate::types::{CreateProductRequest, CreateProductResponse, UpdateVariantRequest};

use super::ShopifyClient;

impl ShopifyClient {
    /// Creates a product with its variants and images in one request.
    ///
    /// # Errors
    ///
    /// - [`ShopifyError::UnexpectedStatus`] if the API rejects the product.
    /// - [`ShopifyError::Http`] on network or TLS failure.
    /// - [`ShopifyError::Deserialize`] if the success body has no product.
    pub async fn create_product(&self, product: &NewProduct) -> Result<CreatedProduct, ShopifyError> {
        let url = self.endpoint("products.json")?;
        let request = self
            .client
            .post(url.clone())
            .json(&CreateProductRequest { product });

        let (body, _) = Self::send(request, &url).await?;
        let created = Self::decode::<CreateProductResponse>(
            &body,
            &format!("created product {}", product.handle),
        )?;
        Ok(created.into())
    }

    /// Sets price and stock on one existing variant.
    ///
    /// # Errors
    ///
    /// - [`ShopifyError::UnexpectedStatus`] if the API rejects the update.
    /// - [`ShopifyError::Http`] on network or TLS failure.
    pub async fn update_variant(&self, update: &VariantUpdate) -> Result<(), ShopifyError> {
        let url = self.endpoint(&format!("variants/{}.json", update.id))?;
        let request = self
            .client
            .put(url.clone())
            .json(&UpdateVariantRequest { variant: update });

        Self::send(request, &url).await?;
        Ok(())
    }
}
