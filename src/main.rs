//! LRU Store - workload driver
//!
//! Runs a synthetic employee workload through the cache and prints the
//! resulting statistics as JSON.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lru_store::workload::{run_workload, Employee};
use lru_store::{Config, MemoryStore, SharedCache};

/// Main entry point for the workload driver.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cache over an in-memory backing store
/// 4. Run the workload phases
/// 5. Print the final statistics report
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lru_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: capacity={}, resized_capacity={}, rounds={}, seed={:?}",
        config.capacity, config.resized_capacity, config.rounds, config.seed
    );

    let cache: SharedCache<Employee, MemoryStore<Employee>> =
        SharedCache::new(config.capacity, MemoryStore::new());

    let summary = run_workload(&config, &cache)
        .await
        .context("workload failed")?;

    let json = serde_json::to_string_pretty(&summary).context("failed to encode summary")?;
    println!("{}", json);

    info!("Workload complete");
    Ok(())
}
