//! GraphQL calls: handle-to-GID lookup and metafield writes.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ShopifyError;
use crate::types::{
    GraphQlRequest, GraphQlResponse, HandleQueryVariables, MetafieldInput, ProductUpdateData,
    ProductUpdateInput, ProductUpdateVariables, ProductsByHandleData, UserError,
};

use super::ShopifyClient;

const PRODUCT_BY_HANDLE: &str = r"query ProductByHandle($query: String!) {
  products(first: 1, query: $query) {
    edges { node { id } }
  }
}";

const PRODUCT_UPDATE: &str = r"mutation ProductUpdate($input: ProductInput!) {
  productUpdate(input: $input) {
    product { id }
    userErrors { field message }
  }
}";

impl ShopifyClient {
    /// Looks up a product's GraphQL id (`gid://shopify/Product/…`) by handle.
    ///
    /// Returns `Ok(None)` when no product has that handle.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, decode, and GraphQL-level errors.
    pub async fn resolve_product_id_by_handle(
        &self,
        handle: &str,
    ) -> Result<Option<String>, ShopifyError> {
        let variables = HandleQueryVariables {
            query: format!("handle:{handle}"),
        };
        let data: ProductsByHandleData = self
            .graphql(PRODUCT_BY_HANDLE, variables, "product lookup by handle")
            .await?;

        Ok(data.products.edges.into_iter().next().map(|edge| edge.node.id))
    }

    /// Writes `metafields` onto the product `product_gid`.
    ///
    /// # Errors
    ///
    /// Returns [`ShopifyError::UserErrors`] when the mutation reports
    /// `userErrors`, and propagates transport, status, decode, and
    /// GraphQL-level errors.
    pub async fn set_product_metafields(
        &self,
        product_gid: &str,
        metafields: &[MetafieldInput],
    ) -> Result<(), ShopifyError> {
        let variables = ProductUpdateVariables {
            input: ProductUpdateInput {
                id: product_gid,
                metafields,
            },
        };
        let data: ProductUpdateData = self
            .graphql(PRODUCT_UPDATE, variables, "productUpdate")
            .await?;

        let user_errors = data
            .product_update
            .map(|payload| payload.user_errors)
            .unwrap_or_default();
        if !user_errors.is_empty() {
            return Err(ShopifyError::UserErrors {
                context: "productUpdate".to_owned(),
                messages: user_errors.iter().map(UserError::describe).collect(),
            });
        }
        Ok(())
    }

    /// Writes the trimmed specifications text as the product's technical
    /// specifications metafield.
    ///
    /// # Errors
    ///
    /// See [`Self::set_product_metafields`].
    pub async fn set_specifications_metafield(
        &self,
        product_gid: &str,
        specifications: &str,
    ) -> Result<(), ShopifyError> {
        self.set_product_metafields(product_gid, &[MetafieldInput::specifications(specifications)])
            .await
    }

    async fn graphql<V: Serialize, T: DeserializeOwned>(
        &self,
        query: &str,
        variables: V,
        context: &str,
    ) -> Result<T, ShopifyError> {
        let url = self.endpoint("graphql.json")?;
        let request = self
            .client
            .post(url.clone())
            .json(&GraphQlRequest { query, variables });

        let (body, _) = Self::send(request, &url).await?;
        let response = Self::decode::<GraphQlResponse<T>>(&body, context)?;

        if !response.errors.is_empty() {
            return Err(ShopifyError::GraphQl(
                response.errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        response.data.ok_or_else(|| ShopifyError::MissingData {
            context: context.to_owned(),
        })
    }
}
