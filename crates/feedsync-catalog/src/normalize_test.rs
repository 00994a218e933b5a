use feedsync_core::ExtraImages;

use super::*;

// -----------------------------------------------------------------------
// normalize_stock
// -----------------------------------------------------------------------

#[test]
fn stock_labels_map_to_quantities() {
    assert_eq!(normalize_stock("high"), 10);
    assert_eq!(normalize_stock("medium"), 5);
    assert_eq!(normalize_stock("low"), 2);
    assert_eq!(normalize_stock("none"), 0);
}

#[test]
fn stock_lookup_ignores_case_and_padding() {
    assert_eq!(normalize_stock(" HIGH "), 10);
    assert_eq!(normalize_stock("Medium"), 5);
}

#[test]
fn stock_is_total() {
    for raw in ["", "nan", "plenty", "10", "hi gh"] {
        assert_eq!(normalize_stock(raw), 0, "unexpected level for {raw:?}");
    }
}

// -----------------------------------------------------------------------
// normalize_ean
// -----------------------------------------------------------------------

#[test]
fn ean_is_trimmed() {
    assert_eq!(normalize_ean(Some(" 4823114015038 ")), "4823114015038");
}

#[test]
fn ean_absent_blank_and_nan_become_empty() {
    assert_eq!(normalize_ean(None), "");
    assert_eq!(normalize_ean(Some("   ")), "");
    assert_eq!(normalize_ean(Some("nan")), "");
    assert_eq!(normalize_ean(Some("NaN")), "");
}

// -----------------------------------------------------------------------
// normalize_color
// -----------------------------------------------------------------------

fn params(color: Option<&str>) -> JsonCell<ColorParams> {
    JsonCell::Present(ColorParams {
        color: color.map(str::to_owned),
    })
}

#[test]
fn color_is_trimmed_and_capitalized() {
    assert_eq!(
        normalize_color(&params(Some("  branco ")), ColorFallback::Empty),
        "Branco"
    );
    assert_eq!(
        normalize_color(&params(Some("PRETO")), ColorFallback::Empty),
        "Preto"
    );
}

#[test]
fn color_fallback_policies_are_distinct() {
    assert_eq!(normalize_color(&JsonCell::Malformed, ColorFallback::Empty), "");
    assert_eq!(
        normalize_color(&JsonCell::Malformed, ColorFallback::Unknown),
        "Cor desconhecida"
    );
    assert_eq!(
        normalize_color(&params(None), ColorFallback::Unknown),
        "Cor desconhecida"
    );
    assert_eq!(
        normalize_color(&JsonCell::Absent, ColorFallback::Unknown),
        "Cor desconhecida"
    );
}

#[test]
fn blank_color_uses_fallback() {
    assert_eq!(
        normalize_color(&params(Some("  ")), ColorFallback::Unknown),
        "Cor desconhecida"
    );
}

// -----------------------------------------------------------------------
// extract_model_base
// -----------------------------------------------------------------------

#[test]
fn suffix_strip_drops_last_token() {
    assert_eq!(
        extract_model_base("ABC-123-W", ModelBaseStrategy::SuffixStrip),
        "ABC-123"
    );
}

#[test]
fn suffix_strip_without_dash_is_identity() {
    assert_eq!(extract_model_base("ABC", ModelBaseStrategy::SuffixStrip), "ABC");
}

#[test]
fn suffix_strip_keeps_case() {
    assert_eq!(
        extract_model_base("Rlc-510a-wh", ModelBaseStrategy::SuffixStrip),
        "Rlc-510a"
    );
}

#[test]
fn token_filter_drops_trailing_color() {
    assert_eq!(
        extract_model_base("ABC-123-BLK", ModelBaseStrategy::TokenFilter),
        "ABC-123"
    );
}

#[test]
fn token_filter_drops_color_tokens_anywhere() {
    assert_eq!(
        extract_model_base("ABC-BLK-123-W", ModelBaseStrategy::TokenFilter),
        "ABC-123"
    );
}

#[test]
fn token_filter_upper_cases() {
    assert_eq!(
        extract_model_base("aj-hub2-white", ModelBaseStrategy::TokenFilter),
        "AJ-HUB2"
    );
}

#[test]
fn token_filter_matches_whole_tokens_only() {
    // "BW" and "WB" contain color letters but are not color tokens.
    assert_eq!(
        extract_model_base("CAM-BW-WB", ModelBaseStrategy::TokenFilter),
        "CAM-BW-WB"
    );
}

// -----------------------------------------------------------------------
// fold_vendor / normalize_category
// -----------------------------------------------------------------------

#[test]
fn ajax_spellings_fold_to_ajax() {
    assert_eq!(fold_vendor("AJAX"), "Ajax");
    assert_eq!(fold_vendor("AjaxCCTV"), "Ajax");
    assert_eq!(fold_vendor("AJAXVIVIENDAVACÍA"), "Ajax");
}

#[test]
fn other_brands_pass_through() {
    assert_eq!(fold_vendor("REOLINK"), "REOLINK");
    assert_eq!(fold_vendor("Yale"), "Yale");
}

#[test]
fn category_is_trimmed_and_lowercased() {
    assert_eq!(normalize_category("  Peças de reposição "), "peças de reposição");
}

// -----------------------------------------------------------------------
// parse_json_cell
// -----------------------------------------------------------------------

#[test]
fn json_cell_decodes_object() {
    let cell: JsonCell<ExtraImages> =
        parse_json_cell(Some(r#"{"details": ["https://cdn/a.jpg", "https://cdn/b.jpg"]}"#));
    assert_eq!(
        cell.value().map(|e| e.details.len()),
        Some(2),
        "expected two images, got {cell:?}"
    );
}

#[test]
fn json_cell_absent_for_blank_or_nan() {
    assert_eq!(parse_json_cell::<ExtraImages>(None), JsonCell::Absent);
    assert_eq!(parse_json_cell::<ExtraImages>(Some("  ")), JsonCell::Absent);
    assert_eq!(parse_json_cell::<ExtraImages>(Some("nan")), JsonCell::Absent);
}

#[test]
fn json_cell_malformed_never_panics() {
    assert_eq!(
        parse_json_cell::<ExtraImages>(Some("{details: [")),
        JsonCell::Malformed
    );
    assert_eq!(
        parse_json_cell::<ColorParams>(Some("[1, 2]")),
        JsonCell::Malformed
    );
}

#[test]
fn json_cell_object_without_key_uses_defaults() {
    let cell: JsonCell<ColorParams> = parse_json_cell(Some(r#"{"size": "M"}"#));
    assert_eq!(cell, JsonCell::Present(ColorParams { color: None }));
}
