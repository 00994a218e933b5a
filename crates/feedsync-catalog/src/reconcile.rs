//! Decides what happens to each product group (or single row) against the
//! catalog snapshot: skip, update existing variants, or create a product.

use feedsync_core::{FeedRow, RemoteProductIndex, SyncProfile};

use crate::filter::ExclusionRules;
use crate::grouping::ProductGroup;
use crate::variant::Variant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Nothing left in the group after deny-list filtering.
    Empty,
    /// A member is deny-listed and the profile skips the whole group.
    DenyListed { sku: String },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Empty => write!(f, "no eligible members"),
            SkipReason::DenyListed { sku } => write!(f, "member {sku} is deny-listed"),
        }
    }
}

/// A feed variant paired with the remote variant it updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantMatch {
    pub variant_id: i64,
    pub variant: Variant,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GroupDecision {
    Skip {
        handle: String,
        reason: SkipReason,
    },
    /// The handle already exists remotely. Members whose SKU is not among the
    /// remote product's variants are listed in `unmatched` and get no call.
    UpdateVariants {
        handle: String,
        product_id: i64,
        matches: Vec<VariantMatch>,
        unmatched: Vec<String>,
    },
    CreateProduct {
        group: ProductGroup,
    },
}

/// Decides the outcome for one group.
///
/// The deny-list is checked again here even though rows were filtered on
/// load: in strict mode any listed member skips the group, otherwise listed
/// members are dropped and an emptied group is skipped.
#[must_use]
pub fn decide_group(
    mut group: ProductGroup,
    index: &RemoteProductIndex,
    rules: &ExclusionRules,
    profile: &SyncProfile,
) -> GroupDecision {
    let handle = group.handle();

    if profile.strict_group_deny {
        if let Some(listed) = group.members.iter().find(|m| rules.sku_excluded(m)) {
            return GroupDecision::Skip {
                handle,
                reason: SkipReason::DenyListed {
                    sku: listed.name.clone(),
                },
            };
        }
    } else {
        group.members.retain(|m| !rules.sku_excluded(m));
    }

    if group.is_empty() {
        return GroupDecision::Skip {
            handle,
            reason: SkipReason::Empty,
        };
    }

    let Some(existing) = index.product_by_handle(&handle) else {
        return GroupDecision::CreateProduct { group };
    };

    let has_variants = group.has_variants();
    let mut matches = Vec::new();
    let mut unmatched = Vec::new();
    for member in &group.members {
        let variant = Variant::from_row(
            member,
            has_variants,
            profile.tax_order,
            profile.color_fallback,
        );
        match existing.variant_by_sku(&variant.sku) {
            Some(remote) => matches.push(VariantMatch {
                variant_id: remote.id,
                variant,
            }),
            None => unmatched.push(variant.sku),
        }
    }

    GroupDecision::UpdateVariants {
        handle,
        product_id: existing.id,
        matches,
        unmatched,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowDecision {
    UpdateVariant {
        product_id: i64,
        matched: VariantMatch,
    },
    CreateProduct {
        row: FeedRow,
    },
}

/// Decides the outcome for one row on its own.
///
/// A row matches when a remote variant carries its SKU, or when a remote
/// product's handle equals the raw supplier SKU (its first variant is then
/// updated).
///
/// Lookups go through the snapshot index, so a SKU match anywhere in the
/// snapshot beats a handle match, and among duplicate SKUs or handles the
/// first product in snapshot order wins. A linear scan that keeps the last
/// matching product would pick differently only on such duplicates.
#[must_use]
pub fn decide_row(row: FeedRow, index: &RemoteProductIndex, profile: &SyncProfile) -> RowDecision {
    let variant = Variant::from_row(&row, false, profile.tax_order, profile.color_fallback);

    let target = index.variant_by_sku(&variant.sku).or_else(|| {
        index.product_by_handle(&row.name).and_then(|p| {
            p.variants
                .first()
                .map(|v| feedsync_core::VariantRef {
                    product_id: p.id,
                    variant_id: v.id,
                })
        })
    });

    match target {
        Some(found) => RowDecision::UpdateVariant {
            product_id: found.product_id,
            matched: VariantMatch {
                variant_id: found.variant_id,
                variant,
            },
        },
        None => RowDecision::CreateProduct { row },
    }
}

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod tests;
