//! One sync pass: read the feed, filter it, snapshot the store, plan, and
//! execute the plan one request at a time.
//!
//! Local problems (missing feed, bad profile, failed snapshot) abort the run
//! before anything is written. Once execution starts, a failed remote call is
//! logged and counted and the run moves on to the next action.

use std::path::PathBuf;

use anyhow::Context;
use feedsync_catalog::{plan_actions, read_feed, ExclusionRules, PlannedUpdate, SyncAction};
use feedsync_core::{AppConfig, NewProduct, RemoteProductIndex, SyncProfile};
use feedsync_shopify::ShopifyClient;

#[derive(Debug, Clone)]
pub(crate) struct RunOptions {
    pub feed_path: PathBuf,
    pub profile_path: PathBuf,
    pub dry_run: bool,
}

/// Counts reported at the end of a run. In a dry run the write counters
/// hold what would have been written.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct RunSummary {
    pub dry_run: bool,
    pub rows_read: usize,
    pub rows_unusable: usize,
    pub rows_excluded: usize,
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
    pub unmatched: usize,
    pub failed: usize,
    pub metafields_written: usize,
    pub metafield_failures: usize,
}

impl RunSummary {
    pub(crate) fn log(&self) {
        tracing::info!(
            dry_run = self.dry_run,
            rows_read = self.rows_read,
            rows_unusable = self.rows_unusable,
            rows_excluded = self.rows_excluded,
            created = self.created,
            updated = self.updated,
            skipped = self.skipped,
            unmatched = self.unmatched,
            failed = self.failed,
            metafields_written = self.metafields_written,
            metafield_failures = self.metafield_failures,
            "sync run finished"
        );
    }
}

/// Runs one full sync pass.
///
/// # Errors
///
/// Returns an error if the profile or feed cannot be loaded, the Shopify
/// client cannot be built, or the catalog snapshot cannot be fetched. Errors
/// from individual creates and updates are counted in the summary instead.
pub(crate) async fn run_sync(
    config: &AppConfig,
    options: &RunOptions,
) -> anyhow::Result<RunSummary> {
    let profile = feedsync_core::load_profile(&options.profile_path).with_context(|| {
        format!(
            "failed to load sync profile {}",
            options.profile_path.display()
        )
    })?;

    let contents = read_feed(&options.feed_path, profile.feed_encoding)
        .with_context(|| format!("failed to read feed {}", options.feed_path.display()))?;

    let mut summary = RunSummary {
        dry_run: options.dry_run,
        rows_read: contents.rows.len(),
        rows_unusable: contents.skipped,
        ..RunSummary::default()
    };

    let rows = ExclusionRules::from_profile(&profile).apply(contents.rows);
    summary.rows_excluded = summary.rows_read - rows.len();
    tracing::info!(
        feed = %options.feed_path.display(),
        eligible = rows.len(),
        excluded = summary.rows_excluded,
        "feed loaded"
    );

    let client = ShopifyClient::from_config(config).context("failed to build Shopify client")?;
    let snapshot = client
        .list_products(config.product_page_limit)
        .await
        .context("failed to fetch catalog snapshot")?;
    let index = RemoteProductIndex::new(snapshot);
    tracing::info!(products = index.len(), "catalog snapshot fetched");

    let actions = plan_actions(rows, &index, &profile);
    tracing::info!(actions = actions.len(), mode = ?profile.reconcile, "sync planned");

    for action in actions {
        if options.dry_run {
            preview(&action, &mut summary);
        } else {
            execute(&client, &profile, action, &mut summary).await;
        }
    }

    Ok(summary)
}

async fn execute(
    client: &ShopifyClient,
    profile: &SyncProfile,
    action: SyncAction,
    summary: &mut RunSummary,
) {
    match action {
        SyncAction::Skip { handle, reason } => {
            tracing::info!(%handle, %reason, "skipping product");
            summary.skipped += 1;
        }
        SyncAction::Update {
            handle,
            product_id,
            updates,
            unmatched,
        } => {
            log_unmatched(&handle, &unmatched, summary);
            for PlannedUpdate { sku, update } in updates {
                match client.update_variant(&update).await {
                    Ok(()) => {
                        tracing::info!(
                            %handle,
                            product_id,
                            variant_id = update.id,
                            %sku,
                            price = %update.price,
                            stock = update.inventory_quantity,
                            "variant updated"
                        );
                        summary.updated += 1;
                    }
                    Err(e) => {
                        tracing::error!(%handle, variant_id = update.id, %sku, error = %e, "variant update failed");
                        summary.failed += 1;
                    }
                }
            }
        }
        SyncAction::Create {
            product,
            specifications,
        } => match client.create_product(&product).await {
            Ok(created) => {
                tracing::info!(
                    handle = %created.handle,
                    product_id = created.id,
                    variants = product.variants.len(),
                    "product created"
                );
                summary.created += 1;

                if profile.specifications_metafield {
                    if let Some(text) = specifications {
                        write_specifications(client, &created.handle, &text, summary).await;
                    }
                }
            }
            Err(e) => {
                tracing::error!(handle = %product.handle, error = %e, "product creation failed");
                summary.failed += 1;
            }
        },
    }
}

async fn write_specifications(
    client: &ShopifyClient,
    handle: &str,
    text: &str,
    summary: &mut RunSummary,
) {
    let gid = match client.resolve_product_id_by_handle(handle).await {
        Ok(Some(gid)) => gid,
        Ok(None) => {
            tracing::warn!(%handle, "created product not found by handle; specifications not written");
            summary.metafield_failures += 1;
            return;
        }
        Err(e) => {
            tracing::error!(%handle, error = %e, "product lookup for specifications failed");
            summary.metafield_failures += 1;
            return;
        }
    };

    match client.set_specifications_metafield(&gid, text).await {
        Ok(()) => {
            tracing::info!(%handle, %gid, "specifications metafield written");
            summary.metafields_written += 1;
        }
        Err(e) => {
            tracing::error!(%handle, %gid, error = %e, "specifications metafield write failed");
            summary.metafield_failures += 1;
        }
    }
}

fn preview(action: &SyncAction, summary: &mut RunSummary) {
    match action {
        SyncAction::Skip { handle, reason } => {
            tracing::info!(%handle, %reason, "dry-run: would skip product");
            summary.skipped += 1;
        }
        SyncAction::Update {
            handle,
            product_id,
            updates,
            unmatched,
        } => {
            log_unmatched(handle, unmatched, summary);
            for PlannedUpdate { sku, update } in updates {
                tracing::info!(
                    %handle,
                    product_id,
                    variant_id = update.id,
                    %sku,
                    price = %update.price,
                    stock = update.inventory_quantity,
                    "dry-run: would update variant"
                );
            }
            summary.updated += updates.len();
        }
        SyncAction::Create {
            product,
            specifications,
        } => {
            log_planned_create(product, specifications.is_some());
            summary.created += 1;
        }
    }
}

fn log_planned_create(product: &NewProduct, has_specifications: bool) {
    tracing::info!(
        handle = %product.handle,
        title = %product.title,
        variants = product.variants.len(),
        images = product.images.len(),
        has_specifications,
        "dry-run: would create product"
    );
}

fn log_unmatched(handle: &str, unmatched: &[String], summary: &mut RunSummary) {
    for sku in unmatched {
        tracing::warn!(%handle, %sku, "no remote variant with this SKU; not updated");
    }
    summary.unmatched += unmatched.len();
}

#[cfg(test)]
#[path = "sync_test.rs"]
mod tests;
