//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with explicit LRU tracking.
//! Not synchronized; see [`BoundedCache`](crate::cache::BoundedCache) for the
//! shared, thread-safe wrapper.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info, warn};

use crate::cache::{CacheEntry, CacheStats, EvictionPattern, LruTracker};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Capacity-bounded key/value storage with LRU eviction.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns `CacheError::InvalidCapacity` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }

        Ok(Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(capacity),
            capacity,
        })
    }

    // == Put ==
    /// Inserts or replaces the value for `key` and marks it most recently used.
    ///
    /// Replacing an existing key never changes the entry count. Inserting a
    /// new key into a full store first evicts the least recently used entry.
    pub fn put(&mut self, key: String, value: V) {
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.replace(value);
            self.lru.touch(&key);
            debug!("Replaced cache entry for key: {}", key);
            return;
        }

        while self.entries.len() >= self.capacity {
            if !self.evict_least_recent() {
                break;
            }
        }

        self.lru.touch(&key);
        debug!("Inserted cache entry for key: {}", key);
        self.entries.insert(key, CacheEntry::new(value));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Update ==
    /// Refreshes the value for a key the caller expects to exist.
    ///
    /// Same behavior as [`put`](Self::put), including insertion when the key
    /// is absent.
    pub fn update(&mut self, key: String, value: V) {
        self.put(key, value);
    }

    // == Get ==
    /// Returns the value for `key` and marks it most recently used.
    ///
    /// A miss returns `None` and leaves the recency order untouched.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        if !self.entries.contains_key(key) {
            self.stats.record_miss();
            debug!("Cache miss for key: {}", key);
            return None;
        }

        self.stats.record_hit();
        self.lru.touch(key);
        debug!("Cache hit for key: {}", key);
        self.entries.get(key).map(|entry| &entry.value)
    }

    // == Contains Key ==
    /// Membership check. Does not touch recency or hit/miss counters.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Evict ==
    /// Removes the entry for `key` if present.
    ///
    /// Returns whether an entry was removed; evicting a missing key is a no-op.
    pub fn evict(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_none() {
            warn!("Cache entry with key {} not found", key);
            return false;
        }

        self.lru.remove(key);
        self.stats.record_invalidations(1);
        self.stats.set_total_entries(self.entries.len());
        info!("Evicted cache entry for key: {}", key);
        true
    }

    // == Evict By Pattern ==
    /// Removes every entry whose key falls under `pattern`.
    ///
    /// `pattern` is a literal prefix with one trailing `*`; other forms are
    /// matched as a literal prefix (see [`EvictionPattern`]). Returns the
    /// number of entries removed.
    pub fn evict_by_pattern(&mut self, pattern: &str) -> usize {
        let parsed = EvictionPattern::parse(pattern);
        let matching: Vec<String> = self
            .entries
            .keys()
            .filter(|key| parsed.matches(key))
            .cloned()
            .collect();

        for key in &matching {
            self.entries.remove(key);
            self.lru.remove(key);
        }

        let count = matching.len();
        self.stats.record_invalidations(count);
        self.stats.set_total_entries(self.entries.len());
        info!("Evicted {} entries by pattern: {}", count, pattern);
        count
    }

    // == Clear ==
    /// Removes all entries.
    pub fn clear(&mut self) {
        let count = self.entries.len();
        self.entries.clear();
        self.lru.clear();
        self.stats.record_invalidations(count);
        self.stats.set_total_entries(0);
        info!("Cleared cache ({} entries removed)", count);
    }

    // == Keys ==
    /// Returns an owned snapshot of the current keys.
    pub fn keys(&self) -> HashSet<String> {
        self.entries.keys().cloned().collect()
    }

    // == Keys By Recency ==
    /// Returns the current keys from least to most recently used.
    pub fn keys_by_recency(&self) -> Vec<String> {
        self.lru.keys_oldest_first().map(str::to_string).collect()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Capacity ==
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops the least recently used entry. Returns false if there was none.
    fn evict_least_recent(&mut self) -> bool {
        let Some(oldest) = self.lru.evict_oldest() else {
            return false;
        };

        if let Some(entry) = self.entries.remove(&oldest) {
            self.stats.record_eviction();
            info!(
                age_ms = entry.age_ms(),
                "Removing least recently used cache entry: {}", oldest
            );
        }
        true
    }

    /// Storage, recency index and capacity all agree.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        self.entries.len() <= self.capacity
            && self.entries.len() == self.lru.len()
            && self.entries.keys().all(|key| self.lru.contains(key))
            && self.lru.is_consistent()
    }
}
