//! Remote catalog shapes: the read-only snapshot taken at the start of a run
//! and the create/update bodies sent back.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A variant as seen in the remote catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteVariant {
    pub id: i64,
    /// Empty SKUs are normalized to `None`.
    pub sku: Option<String>,
}

/// A product as seen in the remote catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteProduct {
    pub id: i64,
    pub handle: String,
    pub variants: Vec<RemoteVariant>,
}

impl RemoteProduct {
    /// Returns the variant whose SKU equals `sku` exactly.
    #[must_use]
    pub fn variant_by_sku(&self, sku: &str) -> Option<&RemoteVariant> {
        self.variants
            .iter()
            .find(|v| v.sku.as_deref() == Some(sku))
    }
}

/// Product and variant ids of one remote variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantRef {
    pub product_id: i64,
    pub variant_id: i64,
}

/// Lookup tables over one catalog snapshot.
///
/// Built once per run and never refreshed, so writes made by this run or by
/// anyone else after the fetch are not visible through it.
#[derive(Debug, Default)]
pub struct RemoteProductIndex {
    products: Vec<RemoteProduct>,
    by_handle: HashMap<String, usize>,
    by_sku: HashMap<String, VariantRef>,
}

impl RemoteProductIndex {
    /// Indexes `products`. When two products share a handle or two variants
    /// share a SKU, the first one in snapshot order wins.
    #[must_use]
    pub fn new(products: Vec<RemoteProduct>) -> Self {
        let mut by_handle = HashMap::new();
        let mut by_sku = HashMap::new();

        for (idx, product) in products.iter().enumerate() {
            by_handle.entry(product.handle.clone()).or_insert(idx);
            for variant in &product.variants {
                if let Some(sku) = &variant.sku {
                    by_sku.entry(sku.clone()).or_insert(VariantRef {
                        product_id: product.id,
                        variant_id: variant.id,
                    });
                }
            }
        }

        Self {
            products,
            by_handle,
            by_sku,
        }
    }

    #[must_use]
    pub fn product_by_handle(&self, handle: &str) -> Option<&RemoteProduct> {
        self.by_handle.get(handle).map(|&idx| &self.products[idx])
    }

    #[must_use]
    pub fn variant_by_sku(&self, sku: &str) -> Option<VariantRef> {
        self.by_sku.get(sku).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub src: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    pub name: String,
}

/// Variant section of a product-creation body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVariant {
    pub sku: String,
    pub barcode: String,
    pub price: Decimal,
    pub inventory_quantity: u32,
    pub inventory_management: String,
    pub cost: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option1: Option<String>,
}

/// Product-creation body. Field order is fixed so identical input always
/// serializes to identical bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    pub body_html: String,
    pub vendor: String,
    pub product_type: String,
    pub tags: String,
    pub handle: String,
    pub images: Vec<ProductImage>,
    pub variants: Vec<NewVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ProductOption>>,
}

/// The only fields this sync ever changes on an existing variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantUpdate {
    pub id: i64,
    pub price: Decimal,
    pub inventory_quantity: u32,
}

/// Identity of a product returned by a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedProduct {
    pub id: i64,
    pub handle: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, handle: &str, variants: &[(i64, Option<&str>)]) -> RemoteProduct {
        RemoteProduct {
            id,
            handle: handle.to_owned(),
            variants: variants
                .iter()
                .map(|(vid, sku)| RemoteVariant {
                    id: *vid,
                    sku: sku.map(str::to_owned),
                })
                .collect(),
        }
    }

    #[test]
    fn index_looks_up_by_handle_and_sku() {
        let index = RemoteProductIndex::new(vec![
            product(1, "aj-hub2", &[(11, Some("4823114000001")), (12, Some("AJ-HUB2-B"))]),
            product(2, "rlc-510a", &[(21, None)]),
        ]);

        assert_eq!(index.len(), 2);
        assert_eq!(index.product_by_handle("aj-hub2").map(|p| p.id), Some(1));
        assert!(index.product_by_handle("AJ-HUB2").is_none());
        assert_eq!(
            index.variant_by_sku("AJ-HUB2-B"),
            Some(VariantRef {
                product_id: 1,
                variant_id: 12
            })
        );
        assert!(index.variant_by_sku("").is_none());
    }

    #[test]
    fn first_product_wins_on_duplicate_sku() {
        let index = RemoteProductIndex::new(vec![
            product(1, "a", &[(11, Some("DUP"))]),
            product(2, "b", &[(21, Some("DUP"))]),
        ]);
        assert_eq!(index.variant_by_sku("DUP").map(|r| r.variant_id), Some(11));
    }

    #[test]
    fn new_variant_omits_absent_option() {
        let variant = NewVariant {
            sku: "X".into(),
            barcode: String::new(),
            price: Decimal::new(2829, 2),
            inventory_quantity: 5,
            inventory_management: "shopify".into(),
            cost: Decimal::new(10, 0),
            option1: None,
        };
        let json = serde_json::to_value(&variant).unwrap();
        assert!(json.get("option1").is_none());
        assert_eq!(json["price"], "28.29");
    }
}
