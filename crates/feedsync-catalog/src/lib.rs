//! Feed ingestion and the pure catalog sync pipeline: read the supplier CSV,
//! filter, group, price, and plan the remote operations for one run.

pub mod error;
pub mod feed;
pub mod filter;
pub mod grouping;
pub mod normalize;
pub mod payload;
pub mod plan;
pub mod pricing;
pub mod reconcile;
pub mod variant;

#[cfg(test)]
mod fixtures;

pub use error::FeedError;
pub use feed::{read_feed, FeedContents};
pub use filter::ExclusionRules;
pub use grouping::{group_rows, ProductGroup};
pub use plan::{plan_actions, PlannedUpdate, SyncAction};
pub use pricing::compute_sell_price;
pub use reconcile::SkipReason;
