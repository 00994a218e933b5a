use feedsync_core::{ColorFallback, FeedRow, TaxOrder};
use rust_decimal::Decimal;

use crate::normalize::{normalize_color, normalize_stock};
use crate::pricing::compute_sell_price;

/// Storefront view of one feed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// EAN when present, otherwise the supplier SKU.
    pub sku: String,
    pub barcode: String,
    pub price: Decimal,
    pub stock_level: u32,
    pub cost_price: Decimal,
    /// Value of the `Cor` option; only set for products with several variants.
    pub color_option: Option<String>,
}

impl Variant {
    #[must_use]
    pub fn from_row(
        row: &FeedRow,
        has_variants: bool,
        tax_order: TaxOrder,
        color_fallback: ColorFallback,
    ) -> Self {
        let color_option = has_variants.then(|| {
            let color = normalize_color(&row.params, color_fallback);
            if color.is_empty() {
                color_fallback.option_label().to_owned()
            } else {
                color
            }
        });

        Self {
            sku: row.variant_sku().to_owned(),
            barcode: row.ean.clone(),
            price: compute_sell_price(row.cost_price, tax_order),
            stock_level: normalize_stock(&row.stock),
            cost_price: row.cost_price,
            color_option,
        }
    }
}
