//! Builders shared by the unit tests of this crate.

use feedsync_core::{
    ColorFallback, ColorParams, DescriptionTemplate, ExtraImages, FeedEncoding, FeedRow, JsonCell,
    ModelBaseStrategy, ReconcileMode, SyncProfile, TaxOrder,
};
use rust_decimal::Decimal;

pub(crate) fn profile() -> SyncProfile {
    SyncProfile {
        feed_encoding: FeedEncoding::Latin1,
        allowed_brands: vec!["AJAX".into(), "Reolink".into()],
        excluded_categories: vec!["Outlet".into(), " Peças de reposição ".into()],
        excluded_skus: vec!["AJ-BATTERYKIT-12M".into(), "4823114061363".into()],
        model_base: ModelBaseStrategy::TokenFilter,
        tax_order: TaxOrder::ShippingBeforeTax,
        color_fallback: ColorFallback::Empty,
        description_template: DescriptionTemplate::BrandCategory,
        reconcile: ReconcileMode::Grouped,
        prefer_white_first: true,
        strict_group_deny: false,
        specifications_metafield: false,
    }
}

pub(crate) fn row(name: &str) -> FeedRow {
    FeedRow {
        name: name.into(),
        ean: String::new(),
        brand: "AJAX".into(),
        category: "Alarmes".into(),
        short_description: format!("{name} short"),
        description: format!("<p>{name}</p>"),
        specifications: None,
        image_path: format!("https://cdn.example/{name}.jpg"),
        extra_images: JsonCell::Absent,
        params: JsonCell::Absent,
        stock: "high".into(),
        cost_price: Decimal::TEN,
    }
}

pub(crate) fn colored(name: &str, color: &str) -> FeedRow {
    FeedRow {
        params: JsonCell::Present(ColorParams {
            color: Some(color.into()),
        }),
        ..row(name)
    }
}

pub(crate) fn with_extras(mut row: FeedRow, extras: &[&str]) -> FeedRow {
    row.extra_images = JsonCell::Present(ExtraImages {
        details: extras.iter().map(|s| (*s).to_owned()).collect(),
    });
    row
}
