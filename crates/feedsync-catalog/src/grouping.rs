//! Groups feed rows into logical products keyed by model base.

use std::collections::BTreeMap;

use feedsync_core::{FeedRow, ModelBaseStrategy};

use crate::normalize::extract_model_base;

/// Feed rows sharing one model base: one remote product with one variant
/// per member.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductGroup {
    pub model_base: String,
    /// Members in feed order. The first one is the product's primary and
    /// supplies title, description, vendor and type.
    pub members: Vec<FeedRow>,
    /// Whether [`ProductGroup::variant_order`] moves white members forward.
    pub white_first: bool,
}

impl ProductGroup {
    /// Remote handle: the lower-cased model base.
    #[must_use]
    pub fn handle(&self) -> String {
        self.model_base.to_lowercase()
    }

    #[must_use]
    pub fn has_variants(&self) -> bool {
        self.members.len() > 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Feed-order primary member.
    #[must_use]
    pub fn primary(&self) -> Option<&FeedRow> {
        self.members.first()
    }

    /// Order of variants and images on a created product. With
    /// `white_first`, white (`branco`) members move to the front; the
    /// partition is stable. The primary is not affected.
    #[must_use]
    pub fn variant_order(&self) -> Vec<&FeedRow> {
        let mut ordered: Vec<&FeedRow> = self.members.iter().collect();
        if self.white_first {
            ordered.sort_by_key(|row| !is_white(row));
        }
        ordered
    }
}

/// Case-insensitive but otherwise exact: a padded `" branco"` is not white.
fn is_white(row: &FeedRow) -> bool {
    row.raw_color()
        .is_some_and(|c| c.to_lowercase() == "branco")
}

/// Groups `rows` by model base.
///
/// Groups come out sorted by model base and members keep feed order.
/// `prefer_white_first` only affects [`ProductGroup::variant_order`].
#[must_use]
pub fn group_rows(
    rows: Vec<FeedRow>,
    strategy: ModelBaseStrategy,
    prefer_white_first: bool,
) -> Vec<ProductGroup> {
    let mut by_base: BTreeMap<String, Vec<FeedRow>> = BTreeMap::new();
    for row in rows {
        let base = extract_model_base(&row.name, strategy);
        by_base.entry(base).or_default().push(row);
    }

    by_base
        .into_iter()
        .map(|(model_base, members)| ProductGroup {
            model_base,
            members,
            white_first: prefer_white_first,
        })
        .collect()
}
