use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A JSON object embedded in a single CSV cell.
///
/// The supplier feed carries a few fields as JSON-in-a-cell. They are
/// optional and frequently broken, so decoding never fails: an empty cell is
/// `Absent`, an undecodable one is `Malformed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JsonCell<T> {
    #[default]
    Absent,
    Malformed,
    Present(T),
}

impl<T> JsonCell<T> {
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            JsonCell::Present(v) => Some(v),
            JsonCell::Absent | JsonCell::Malformed => None,
        }
    }
}

/// Decoded `params` cell, e.g. `{"color": "Branco"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorParams {
    #[serde(default)]
    pub color: Option<String>,
}

/// Decoded `extra_images_paths` cell, e.g. `{"details": ["https://…"]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraImages {
    #[serde(default)]
    pub details: Vec<String>,
}

/// One supplier SKU from the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedRow {
    /// Supplier SKU, e.g. `"AJ-HUB2-W"`.
    pub name: String,
    /// Normalized barcode: digits as given, or `""` when absent. Never `"nan"`.
    pub ean: String,
    pub brand: String,
    pub category: String,
    pub short_description: String,
    pub description: String,
    pub specifications: Option<String>,
    pub image_path: String,
    pub extra_images: JsonCell<ExtraImages>,
    pub params: JsonCell<ColorParams>,
    /// Raw stock label (`high`, `medium`, `low`, `none`).
    pub stock: String,
    /// Net purchase price from the supplier.
    pub cost_price: Decimal,
}

impl FeedRow {
    /// Raw color from the `params` cell, if any.
    #[must_use]
    pub fn raw_color(&self) -> Option<&str> {
        self.params.value().and_then(|p| p.color.as_deref())
    }

    /// Extra image URLs; empty when the cell is absent or malformed.
    #[must_use]
    pub fn extra_image_urls(&self) -> &[String] {
        self.extra_images
            .value()
            .map_or(&[], |images| images.details.as_slice())
    }

    /// The SKU used on the remote variant: the EAN when present, otherwise
    /// the supplier SKU.
    #[must_use]
    pub fn variant_sku(&self) -> &str {
        if self.ean.is_empty() {
            &self.name
        } else {
            &self.ean
        }
    }
}
