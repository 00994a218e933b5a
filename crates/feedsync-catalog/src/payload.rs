//! Request bodies for product creation and variant updates.

use feedsync_core::{
    DescriptionTemplate, FeedRow, NewProduct, NewVariant, ProductImage, ProductOption,
    SyncProfile, VariantUpdate,
};

use crate::grouping::ProductGroup;
use crate::normalize::fold_vendor;
use crate::reconcile::VariantMatch;
use crate::variant::Variant;

/// Maximum product title length accepted by the storefront.
pub const MAX_TITLE_CHARS: usize = 255;

/// Name of the single option used for multi-variant products.
pub const COLOR_OPTION_NAME: &str = "Cor";

/// Builds the creation body for a grouped product. Returns `None` for an
/// empty group.
///
/// Product-level fields come from the feed-order primary; variants and
/// images follow [`ProductGroup::variant_order`].
#[must_use]
pub fn build_group_payload(group: &ProductGroup, profile: &SyncProfile) -> Option<NewProduct> {
    let primary = group.primary()?;
    Some(build_product(
        group.handle(),
        primary,
        &group.variant_order(),
        group.has_variants(),
        profile,
    ))
}

/// Builds the creation body for a single row synchronized on its own. The
/// handle is the raw supplier SKU and the product has exactly one variant.
#[must_use]
pub fn build_row_payload(row: &FeedRow, profile: &SyncProfile) -> NewProduct {
    build_product(row.name.clone(), row, &[row], false, profile)
}

/// Only price and stock are ever changed on an existing variant.
#[must_use]
pub fn build_variant_update(matched: &VariantMatch) -> VariantUpdate {
    VariantUpdate {
        id: matched.variant_id,
        price: matched.variant.price,
        inventory_quantity: matched.variant.stock_level,
    }
}

/// Trimmed specifications text of a product's primary row, if it has any.
#[must_use]
pub fn primary_specifications(primary: Option<&FeedRow>) -> Option<String> {
    primary
        .and_then(|row| row.specifications.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// `first` supplies the product-level fields; `members` supplies variants
/// and images in order. Images are kept as listed, duplicates included.
fn build_product(
    handle: String,
    first: &FeedRow,
    members: &[&FeedRow],
    has_variants: bool,
    profile: &SyncProfile,
) -> NewProduct {
    let vendor = fold_vendor(&first.brand);
    let product_type = if first.category.trim().is_empty() {
        vendor.clone()
    } else {
        first.category.clone()
    };
    let body_html = render_description(first, &vendor, profile.description_template);

    let mut images = Vec::new();
    let mut variants = Vec::with_capacity(members.len());
    for &row in members {
        let variant = Variant::from_row(row, has_variants, profile.tax_order, profile.color_fallback);
        variants.push(NewVariant {
            sku: variant.sku,
            barcode: variant.barcode,
            price: variant.price,
            inventory_quantity: variant.stock_level,
            inventory_management: "shopify".to_owned(),
            cost: variant.cost_price,
            option1: variant.color_option,
        });

        if !row.image_path.trim().is_empty() {
            images.push(ProductImage {
                src: row.image_path.trim().to_owned(),
            });
        }
        images.extend(row.extra_image_urls().iter().map(|src| ProductImage {
            src: src.clone(),
        }));
    }

    let options = has_variants.then(|| {
        vec![ProductOption {
            name: COLOR_OPTION_NAME.to_owned(),
        }]
    });

    NewProduct {
        title: truncate_chars(&first.short_description, MAX_TITLE_CHARS),
        body_html,
        tags: vendor.clone(),
        vendor,
        product_type,
        handle,
        images,
        variants,
        options,
    }
}

fn render_description(row: &FeedRow, vendor: &str, template: DescriptionTemplate) -> String {
    match template {
        DescriptionTemplate::BrandCategory => format!(
            "{}<br><br><strong>Marca:</strong> {vendor}<br><strong>Categoria:</strong> {}",
            row.description, row.category
        ),
        DescriptionTemplate::Specifications => format!(
            "{}<br><br><strong>Especificações Técnicas:</strong><br>{}",
            row.description,
            row.specifications.as_deref().unwrap_or_default()
        ),
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
#[path = "payload_test.rs"]
mod tests;
