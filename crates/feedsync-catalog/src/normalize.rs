//! Canonicalization of raw feed fields.
//!
//! Everything here is total: unknown or malformed input maps to a documented
//! fallback instead of an error.

use feedsync_core::{ColorFallback, ColorParams, JsonCell, ModelBaseStrategy};
use serde::de::DeserializeOwned;

/// Supplier color codes that appear as SKU tokens and never belong to the
/// model base.
pub const COLOR_CODE_TOKENS: &[&str] = &[
    "W", "B", "BLK", "WHITE", "BLACK", "BRANCO", "PRETO", "OLI", "GRE", "FOG", "GRA", "OYS", "IVO",
];

/// Brand spellings folded into the single `Ajax` vendor.
const AJAX_SYNONYMS: &[&str] = &["AJAX", "AJAXCCTV", "AJAXVIVIENDAVACÍA"];

/// Maps a stock label to the quantity published on the storefront.
///
/// `high` → 10, `medium` → 5, `low` → 2, `none` → 0, case-insensitive.
/// Anything else, including an empty cell, is 0.
#[must_use]
pub fn normalize_stock(raw: &str) -> u32 {
    match raw.trim().to_lowercase().as_str() {
        "high" => 10,
        "medium" => 5,
        "low" => 2,
        _ => 0,
    }
}

/// Trims a raw EAN cell. Missing, blank, and `nan` (any case) all mean "no
/// barcode" and become `""`.
#[must_use]
pub fn normalize_ean(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("nan") {
        return String::new();
    }
    trimmed.to_owned()
}

/// Canonical form used to compare categories against the deny-list.
#[must_use]
pub fn normalize_category(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Returns the display color of a row: trimmed, first letter upper-case and
/// the rest lower-case (`"PRETO "` → `"Preto"`).
///
/// A missing, malformed, or blank color yields `fallback.normalized_text()`.
#[must_use]
pub fn normalize_color(params: &JsonCell<ColorParams>, fallback: ColorFallback) -> String {
    let color = params
        .value()
        .and_then(|p| p.color.as_deref())
        .map(str::trim)
        .filter(|c| !c.is_empty());

    match color {
        Some(c) => capitalize(c),
        None => fallback.normalized_text().to_owned(),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Derives the model base shared by all color/size SKUs of one product.
///
/// - [`ModelBaseStrategy::SuffixStrip`]: `"ABC-123-W"` → `"ABC-123"`; a SKU
///   without `-` is returned unchanged.
/// - [`ModelBaseStrategy::TokenFilter`]: `"abc-blk-123-w"` → `"ABC-123"`; every
///   token in [`COLOR_CODE_TOKENS`] is removed wherever it appears.
#[must_use]
pub fn extract_model_base(sku: &str, strategy: ModelBaseStrategy) -> String {
    match strategy {
        ModelBaseStrategy::SuffixStrip => sku
            .rsplit_once('-')
            .map_or(sku, |(head, _suffix)| head)
            .to_owned(),
        ModelBaseStrategy::TokenFilter => sku
            .to_uppercase()
            .split('-')
            .filter(|token| !COLOR_CODE_TOKENS.contains(token))
            .collect::<Vec<_>>()
            .join("-"),
    }
}

/// Folds supplier brand spellings into the storefront vendor name.
#[must_use]
pub fn fold_vendor(brand: &str) -> String {
    if AJAX_SYNONYMS.contains(&brand.to_uppercase().as_str()) {
        "Ajax".to_owned()
    } else {
        brand.to_owned()
    }
}

/// Decodes a JSON object stored in a CSV cell.
///
/// Blank cells and the `nan` placeholder are `Absent`; anything that does
/// not decode into `T` is `Malformed`.
#[must_use]
pub fn parse_json_cell<T: DeserializeOwned>(raw: Option<&str>) -> JsonCell<T> {
    let Some(raw) = raw.map(str::trim) else {
        return JsonCell::Absent;
    };
    if raw.is_empty() || raw.eq_ignore_ascii_case("nan") {
        return JsonCell::Absent;
    }
    match serde_json::from_str::<T>(raw) {
        Ok(value) => JsonCell::Present(value),
        Err(e) => {
            tracing::debug!(error = %e, "malformed JSON cell");
            JsonCell::Malformed
        }
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
