//! Bounded Cache Module
//!
//! Thread-safe wrapper around [`CacheStore`] shared by request handlers.

use std::collections::HashSet;

use parking_lot::Mutex;

use crate::cache::{CacheStats, CacheStore};
use crate::error::Result;

// == Bounded Cache ==
/// Capacity-bounded LRU cache safe to share across threads.
///
/// A single mutex guards the whole store and every method takes it exactly
/// once, so each operation is atomic with respect to all others. In
/// particular two concurrent `put`s that both need room cannot pick the same
/// victim or overshoot the capacity.
///
/// The cache knows nothing about the data behind its values. A read that
/// races a database write and its follow-up invalidation may still return
/// the old value until the invalidation lands; callers own that window.
///
/// Construct one per process in the composition root and share it with
/// `Arc`.
#[derive(Debug)]
pub struct BoundedCache<V> {
    inner: Mutex<CacheStore<V>>,
}

impl<V> BoundedCache<V> {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns `CacheError::InvalidCapacity` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            inner: Mutex::new(CacheStore::new(capacity)?),
        })
    }

    // == Contains Key ==
    /// Membership check that leaves the eviction order alone.
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.lock().contains_key(key)
    }

    // == Put ==
    /// Inserts or replaces a value and marks it most recently used.
    pub fn put(&self, key: impl Into<String>, value: V) {
        self.inner.lock().put(key.into(), value);
    }

    // == Update ==
    /// Refreshes a value the caller expects to be cached. Same as `put`.
    pub fn update(&self, key: impl Into<String>, value: V) {
        self.inner.lock().update(key.into(), value);
    }

    // == Evict ==
    /// Removes one entry. Returns whether anything was removed.
    pub fn evict(&self, key: &str) -> bool {
        self.inner.lock().evict(key)
    }

    // == Evict By Pattern ==
    /// Removes every entry under a `prefix*` pattern and returns how many.
    pub fn evict_by_pattern(&self, pattern: &str) -> usize {
        self.inner.lock().evict_by_pattern(pattern)
    }

    // == Clear ==
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    // == Keys ==
    /// Point-in-time copy of the cached keys.
    pub fn keys(&self) -> HashSet<String> {
        self.inner.lock().keys()
    }

    // == Keys By Recency ==
    /// Point-in-time copy of the keys, least recently used first.
    pub fn keys_by_recency(&self) -> Vec<String> {
        self.inner.lock().keys_by_recency()
    }

    // == Stats ==
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    // == Capacity ==
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        self.inner.lock().is_consistent()
    }
}

impl<V: Clone> BoundedCache<V> {
    // == Get ==
    /// Returns a clone of the cached value and marks it most recently used.
    ///
    /// Store `Arc`-wrapped values to keep the clone cheap.
    pub fn get(&self, key: &str) -> Option<V> {
        self.inner.lock().get(key).cloned()
    }
}
