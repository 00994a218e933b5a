//! Sync profile: the deny-lists, allow-lists and strategy selections for one
//! sync mode, loaded from YAML.
//!
//! Several sync modes differ only in which variant of an operation they use
//! (tax ordering, model-base extraction, color fallback text, description
//! suffix). Each of those choices is an explicit enum here so a profile file
//! fully describes the behavior of a run.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Character encoding of the supplier CSV. Never auto-detected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedEncoding {
    Utf8,
    /// Single-byte Western European (decoded as Windows-1252, a superset of Latin-1).
    #[default]
    Latin1,
}

/// How a supplier SKU is reduced to the model base shared by its color/size
/// siblings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelBaseStrategy {
    /// Drop the last `-`-delimited token.
    SuffixStrip,
    /// Upper-case, then drop every token that is a known color code.
    #[default]
    TokenFilter,
}

/// Where the flat shipping fee is added relative to VAT.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxOrder {
    /// `round((sell + shipping) * vat, 2)`: shipping is taxed.
    #[default]
    ShippingBeforeTax,
    /// `round(sell * vat + shipping, 2)`: shipping is added untaxed.
    ShippingAfterTax,
}

/// Text used when a row carries no usable color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorFallback {
    /// Normalized color falls back to `""`; the variant option reads `Padrão`.
    #[default]
    Empty,
    /// Both fall back to `Cor desconhecida`.
    Unknown,
}

impl ColorFallback {
    /// Fallback returned by color normalization.
    #[must_use]
    pub fn normalized_text(self) -> &'static str {
        match self {
            ColorFallback::Empty => "",
            ColorFallback::Unknown => "Cor desconhecida",
        }
    }

    /// Fallback used for the `Cor` option value of a variant.
    #[must_use]
    pub fn option_label(self) -> &'static str {
        match self {
            ColorFallback::Empty => "Padrão",
            ColorFallback::Unknown => "Cor desconhecida",
        }
    }
}

/// Block appended to the supplier description in a created product's body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionTemplate {
    /// `<strong>Marca:</strong> … <strong>Categoria:</strong> …`
    #[default]
    BrandCategory,
    /// `<strong>Especificações Técnicas:</strong><br>…`
    Specifications,
}

/// Matching granularity between feed rows and the remote catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileMode {
    /// Rows are grouped by model base; a group matches a remote product by handle.
    #[default]
    Grouped,
    /// Each row matches on its own, by variant SKU or by handle equal to the raw SKU.
    PerRow,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncProfile {
    #[serde(default)]
    pub feed_encoding: FeedEncoding,
    /// Brands accepted from the feed, compared upper-cased.
    pub allowed_brands: Vec<String>,
    /// Categories dropped from the feed, compared trimmed and lower-cased.
    #[serde(default)]
    pub excluded_categories: Vec<String>,
    /// Supplier SKUs or EANs never synchronized.
    #[serde(default)]
    pub excluded_skus: Vec<String>,
    #[serde(default)]
    pub model_base: ModelBaseStrategy,
    #[serde(default)]
    pub tax_order: TaxOrder,
    #[serde(default)]
    pub color_fallback: ColorFallback,
    #[serde(default)]
    pub description_template: DescriptionTemplate,
    #[serde(default)]
    pub reconcile: ReconcileMode,
    /// Put white (`branco`) variants first so they become the primary image.
    #[serde(default = "default_true")]
    pub prefer_white_first: bool,
    /// Skip a whole group when any member is deny-listed instead of dropping
    /// only that member.
    #[serde(default)]
    pub strict_group_deny: bool,
    /// Write the specifications text to a product metafield after creation.
    #[serde(default)]
    pub specifications_metafield: bool,
}

fn default_true() -> bool {
    true
}

/// Load and validate a sync profile from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_profile(path: &Path) -> Result<SyncProfile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ProfileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_profile(&content)
}

/// Parse and validate a sync profile from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_profile(content: &str) -> Result<SyncProfile, ConfigError> {
    let profile: SyncProfile = serde_yaml::from_str(content)?;
    validate_profile(&profile)?;
    Ok(profile)
}

fn validate_profile(profile: &SyncProfile) -> Result<(), ConfigError> {
    if profile.allowed_brands.is_empty() {
        return Err(ConfigError::Validation(
            "allowed_brands must list at least one brand".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for brand in &profile.allowed_brands {
        let key = brand.trim().to_uppercase();
        if key.is_empty() {
            return Err(ConfigError::Validation(
                "allowed_brands entries must be non-empty".to_string(),
            ));
        }
        if !seen.insert(key) {
            return Err(ConfigError::Validation(format!(
                "duplicate allowed brand: '{brand}'"
            )));
        }
    }

    if profile
        .excluded_skus
        .iter()
        .any(|sku| sku.trim().is_empty())
    {
        return Err(ConfigError::Validation(
            "excluded_skus entries must be non-empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
