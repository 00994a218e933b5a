mod sync;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "feedsync")]
#[command(about = "Synchronize a supplier product feed into a Shopify catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one sync pass: read the feed, compare with the store, create or update
    Run {
        /// Feed CSV to read instead of `FEEDSYNC_FEED_PATH`
        #[arg(long)]
        feed: Option<PathBuf>,
        /// Sync profile YAML to use instead of `FEEDSYNC_PROFILE_PATH`
        #[arg(long)]
        profile: Option<PathBuf>,
        /// Plan against the live catalog and log the actions without writing
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = feedsync_core::load_app_config_from_env()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Commands::Run {
            feed,
            profile,
            dry_run,
        } => {
            let options = sync::RunOptions {
                feed_path: feed.unwrap_or_else(|| config.feed_path.clone()),
                profile_path: profile.unwrap_or_else(|| config.profile_path.clone()),
                dry_run,
            };
            let summary = sync::run_sync(&config, &options).await?;
            summary.log();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
