//! Memoization Helpers
//!
//! The read and invalidation protocol services follow around a shared
//! [`BoundedCache`]: look up the query key, compute on miss and store, then
//! drop every variant of an entity's queries after a mutation.
//!
//! Invalidation runs after the underlying write has completed, as a separate
//! step. Until it finishes a concurrent reader can still be served the old
//! cached result.

use tracing::{debug, info};

use crate::cache::BoundedCache;
use crate::keys::{entity_pattern, item_key};

// == Get Or Compute ==
/// Returns the cached value for `key`, or runs `compute` and caches its result.
///
/// `compute` runs without the cache lock held, so a slow query does not block
/// other requests. Two callers missing on the same key may both compute; the
/// later `put` wins. Errors are passed through and nothing is cached.
pub fn get_or_compute<V, E, F>(cache: &BoundedCache<V>, key: &str, compute: F) -> Result<V, E>
where
    V: Clone,
    F: FnOnce() -> Result<V, E>,
{
    if let Some(value) = cache.get(key) {
        debug!("Serving cached result for key: {}", key);
        return Ok(value);
    }

    let value = compute()?;
    cache.put(key, value.clone());
    Ok(value)
}

// == Invalidate Entity ==
/// Drops every cached list query of `entity` (`"<entity>_*"`).
///
/// Returns the number of entries removed.
pub fn invalidate_entity<V>(cache: &BoundedCache<V>, entity: &str) -> usize {
    let removed = cache.evict_by_pattern(&entity_pattern(entity));
    info!("Invalidated {} cached {} queries", removed, entity);
    removed
}

// == Invalidate Item ==
/// Drops one item's single-entry cache plus every list query of its entity.
///
/// For an album update this evicts `album_<id>` and `albums_*`. Returns the
/// total number of entries removed.
pub fn invalidate_item<V>(
    cache: &BoundedCache<V>,
    item_entity: &str,
    id: impl std::fmt::Display,
    list_entity: &str,
) -> usize {
    let item_removed = usize::from(cache.evict(&item_key(item_entity, id)));
    item_removed + invalidate_entity(cache, list_entity)
}
