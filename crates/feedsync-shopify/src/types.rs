//! Wire types for the Shopify Admin API.
//!
//! Response structs deserialize only the fields the sync reads; everything
//! else in the payload is ignored. Request envelopes borrow the payloads
//! built by the catalog crate.

use feedsync_core::{CreatedProduct, NewProduct, RemoteProduct, RemoteVariant, VariantUpdate};
use serde::{Deserialize, Serialize};

/// Metafield namespace for product specifications.
pub const SPECIFICATIONS_NAMESPACE: &str = "custom";
/// Metafield key for product specifications.
pub const SPECIFICATIONS_KEY: &str = "especifica_es_t_cnicas";
const MULTI_LINE_TEXT: &str = "multi_line_text_field";

// ---------------------------------------------------------------------------
// REST
// ---------------------------------------------------------------------------

/// Top-level response from `GET /admin/api/{version}/products.json`.
#[derive(Debug, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<AdminProduct>,
}

#[derive(Debug, Deserialize)]
pub struct AdminProduct {
    pub id: i64,
    pub handle: String,
    #[serde(default)]
    pub variants: Vec<AdminVariant>,
}

#[derive(Debug, Deserialize)]
pub struct AdminVariant {
    pub id: i64,
    pub sku: Option<String>,
}

impl From<AdminVariant> for RemoteVariant {
    fn from(v: AdminVariant) -> Self {
        Self {
            id: v.id,
            sku: v.sku.filter(|s| !s.trim().is_empty()),
        }
    }
}

impl From<AdminProduct> for RemoteProduct {
    fn from(p: AdminProduct) -> Self {
        Self {
            id: p.id,
            handle: p.handle,
            variants: p.variants.into_iter().map(RemoteVariant::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateProductRequest<'a> {
    pub product: &'a NewProduct,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductResponse {
    pub product: CreatedProductBody,
}

#[derive(Debug, Deserialize)]
pub struct CreatedProductBody {
    pub id: i64,
    pub handle: String,
}

impl From<CreateProductResponse> for CreatedProduct {
    fn from(r: CreateProductResponse) -> Self {
        Self {
            id: r.product.id,
            handle: r.product.handle,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateVariantRequest<'a> {
    pub variant: &'a VariantUpdate,
}

// ---------------------------------------------------------------------------
// GraphQL
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlErrorBody {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HandleQueryVariables {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct ProductsByHandleData {
    pub products: ProductConnection,
}

#[derive(Debug, Deserialize)]
pub struct ProductConnection {
    pub edges: Vec<ProductEdge>,
}

#[derive(Debug, Deserialize)]
pub struct ProductEdge {
    pub node: ProductNode,
}

#[derive(Debug, Deserialize)]
pub struct ProductNode {
    pub id: String,
}

/// One metafield written through `productUpdate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetafieldInput {
    pub namespace: String,
    pub key: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub value: String,
}

impl MetafieldInput {
    /// The multi-line specifications metafield. `text` is trimmed.
    #[must_use]
    pub fn specifications(text: &str) -> Self {
        Self {
            namespace: SPECIFICATIONS_NAMESPACE.to_owned(),
            key: SPECIFICATIONS_KEY.to_owned(),
            field_type: MULTI_LINE_TEXT.to_owned(),
            value: text.trim().to_owned(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductUpdateVariables<'a> {
    pub input: ProductUpdateInput<'a>,
}

#[derive(Debug, Serialize)]
pub struct ProductUpdateInput<'a> {
    pub id: &'a str,
    pub metafields: &'a [MetafieldInput],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdateData {
    pub product_update: Option<ProductUpdatePayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdatePayload {
    #[serde(default)]
    pub user_errors: Vec<UserError>,
}

#[derive(Debug, Deserialize)]
pub struct UserError {
    #[serde(default)]
    pub field: Option<Vec<String>>,
    pub message: String,
}

impl UserError {
    /// `"field.path: message"`, or just the message when no field is named.
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.field {
            Some(path) if !path.is_empty() => format!("{}: {}", path.join("."), self.message),
            _ => self.message.clone(),
        }
    }
}
