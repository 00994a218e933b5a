//! Row-level admission rules: brand allow-list, category deny-list, and the
//! SKU/EAN deny-list.

use std::collections::HashSet;

use feedsync_core::{FeedRow, SyncProfile};

use crate::normalize::normalize_category;

#[derive(Debug, Clone, Default)]
pub struct ExclusionRules {
    allowed_brands: HashSet<String>,
    excluded_categories: HashSet<String>,
    excluded_skus: HashSet<String>,
}

impl ExclusionRules {
    #[must_use]
    pub fn from_profile(profile: &SyncProfile) -> Self {
        Self {
            allowed_brands: profile
                .allowed_brands
                .iter()
                .map(|b| b.trim().to_uppercase())
                .collect(),
            excluded_categories: profile
                .excluded_categories
                .iter()
                .map(|c| normalize_category(c))
                .collect(),
            excluded_skus: profile
                .excluded_skus
                .iter()
                .map(|s| s.trim().to_owned())
                .collect(),
        }
    }

    #[must_use]
    pub fn brand_allowed(&self, brand: &str) -> bool {
        self.allowed_brands.contains(&brand.trim().to_uppercase())
    }

    #[must_use]
    pub fn category_excluded(&self, category: &str) -> bool {
        self.excluded_categories
            .contains(&normalize_category(category))
    }

    /// A row is deny-listed when either its supplier SKU or its EAN is listed.
    #[must_use]
    pub fn sku_excluded(&self, row: &FeedRow) -> bool {
        self.excluded_skus.contains(row.name.trim())
            || (!row.ean.is_empty() && self.excluded_skus.contains(&row.ean))
    }

    #[must_use]
    pub fn admits(&self, row: &FeedRow) -> bool {
        self.brand_allowed(&row.brand)
            && !self.category_excluded(&row.category)
            && !self.sku_excluded(row)
    }

    /// Keeps the admitted rows, preserving feed order.
    #[must_use]
    pub fn apply(&self, rows: Vec<FeedRow>) -> Vec<FeedRow> {
        let before = rows.len();
        let kept: Vec<FeedRow> = rows.into_iter().filter(|r| self.admits(r)).collect();
        tracing::debug!(before, kept = kept.len(), "applied exclusion rules");
        kept
    }
}
