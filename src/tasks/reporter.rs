//! Statistics Reporter Task
//!
//! Background task that periodically logs cache statistics.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::info;

use crate::cache::BoundedCache;

/// Spawns a background task that logs a statistics snapshot every
/// `interval_secs` seconds.
///
/// Each snapshot takes the cache lock once, for the duration of a copy.
/// The returned handle is aborted during graceful shutdown. An interval of
/// zero is treated as one second.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(BoundedCache::<serde_json::Value>::new(100)?);
/// let reporter = spawn_stats_reporter(cache.clone(), 60);
/// // Later, during shutdown:
/// reporter.abort();
/// ```
pub fn spawn_stats_reporter<V>(cache: Arc<BoundedCache<V>>, interval_secs: u64) -> JoinHandle<()>
where
    V: Send + 'static,
{
    let period = Duration::from_secs(interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting stats reporter with interval of {} seconds",
            period.as_secs()
        );

        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let stats = cache.stats();
            info!(
                hits = stats.hits,
                misses = stats.misses,
                evictions = stats.evictions,
                invalidations = stats.invalidations,
                entries = stats.total_entries,
                capacity = stats.capacity,
                "Cache stats: hit rate {:.2}",
                stats.hit_rate()
            );
        }
    })
}
