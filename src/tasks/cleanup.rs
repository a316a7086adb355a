//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries.
//! Expiry-on-read already keeps results correct; the sweep only prunes
//! entries nobody re-reads so the table does not accumulate dead keys.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::LookupCache;

/// Spawns a background task that periodically sweeps expired entries.
///
/// The task runs in an infinite loop, sleeping for the specified
/// interval between sweeps and taking a write lock for each one.
///
/// # Arguments
/// * `cache` - Shared reference to the lookup cache
/// * `interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort it during
/// graceful shutdown.
pub fn spawn_sweep_task(cache: Arc<RwLock<LookupCache>>, interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!("Starting expiry sweep task with interval of {} seconds", interval_secs);

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.sweep_expired()
            };

            if removed > 0 {
                info!("Expiry sweep: removed {} expired entries", removed);
            } else {
                debug!("Expiry sweep: no expired entries found");
            }
        }
    })
}
