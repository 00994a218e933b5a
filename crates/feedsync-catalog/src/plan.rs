//! Turns filtered feed rows and a catalog snapshot into the ordered list of
//! remote operations for one run.

use feedsync_core::{
    FeedRow, NewProduct, ReconcileMode, RemoteProductIndex, SyncProfile, VariantUpdate,
};

use crate::filter::ExclusionRules;
use crate::grouping::group_rows;
use crate::payload::{
    build_group_payload, build_row_payload, build_variant_update, primary_specifications,
};
use crate::reconcile::{decide_group, decide_row, GroupDecision, RowDecision, SkipReason};

/// One variant update, keyed by the SKU it was matched on for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedUpdate {
    pub sku: String,
    pub update: VariantUpdate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SyncAction {
    Skip {
        handle: String,
        reason: SkipReason,
    },
    Update {
        handle: String,
        product_id: i64,
        updates: Vec<PlannedUpdate>,
        unmatched: Vec<String>,
    },
    Create {
        product: NewProduct,
        /// Trimmed specifications of the primary member, written as a
        /// metafield after creation when the profile asks for it.
        specifications: Option<String>,
    },
}

impl SyncAction {
    #[must_use]
    pub fn handle(&self) -> &str {
        match self {
            SyncAction::Skip { handle, .. } | SyncAction::Update { handle, .. } => handle,
            SyncAction::Create { product, .. } => &product.handle,
        }
    }
}

/// Plans every action for `rows`, which must already have passed the
/// profile's exclusion rules.
///
/// Grouped mode emits one action per product group in model-base order.
/// Per-row mode emits one action per row in feed order.
#[must_use]
pub fn plan_actions(
    rows: Vec<FeedRow>,
    index: &RemoteProductIndex,
    profile: &SyncProfile,
) -> Vec<SyncAction> {
    match profile.reconcile {
        ReconcileMode::Grouped => plan_grouped(rows, index, profile),
        ReconcileMode::PerRow => rows
            .into_iter()
            .map(|row| plan_row(row, index, profile))
            .collect(),
    }
}

fn plan_grouped(
    rows: Vec<FeedRow>,
    index: &RemoteProductIndex,
    profile: &SyncProfile,
) -> Vec<SyncAction> {
    let rules = ExclusionRules::from_profile(profile);
    let groups = group_rows(rows, profile.model_base, profile.prefer_white_first);

    let mut actions = Vec::with_capacity(groups.len());
    for group in groups {
        let action = match decide_group(group, index, &rules, profile) {
            GroupDecision::Skip { handle, reason } => SyncAction::Skip { handle, reason },
            GroupDecision::UpdateVariants {
                handle,
                product_id,
                matches,
                unmatched,
            } => SyncAction::Update {
                handle,
                product_id,
                updates: matches
                    .iter()
                    .map(|m| PlannedUpdate {
                        sku: m.variant.sku.clone(),
                        update: build_variant_update(m),
                    })
                    .collect(),
                unmatched,
            },
            GroupDecision::CreateProduct { group } => match build_group_payload(&group, profile) {
                Some(product) => SyncAction::Create {
                    product,
                    specifications: primary_specifications(group.primary()),
                },
                None => SyncAction::Skip {
                    handle: group.handle(),
                    reason: SkipReason::Empty,
                },
            },
        };
        actions.push(action);
    }
    actions
}

fn plan_row(row: FeedRow, index: &RemoteProductIndex, profile: &SyncProfile) -> SyncAction {
    let handle = row.name.clone();
    match decide_row(row, index, profile) {
        RowDecision::UpdateVariant {
            product_id,
            matched,
        } => SyncAction::Update {
            handle,
            product_id,
            updates: vec![PlannedUpdate {
                sku: matched.variant.sku.clone(),
                update: build_variant_update(&matched),
            }],
            unmatched: Vec::new(),
        },
        RowDecision::CreateProduct { row } => SyncAction::Create {
            product: build_row_payload(&row, profile),
            specifications: primary_specifications(Some(&row)),
        },
    }
}
