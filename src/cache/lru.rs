//! LRU Tracker Module
//!
//! Implements Least Recently Used tracking for cache eviction.

use std::collections::{BTreeMap, HashMap};

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Every touch stamps the key with a fresh, strictly increasing tick.
/// `order` maps ticks to keys, so its first entry is always the least
/// recently used key and its last entry the most recently used one.
/// `positions` is the reverse index used to drop a key's stale tick.
///
/// Ticks are never reused, so two keys can never tie; among keys that were
/// only inserted and never read, insertion order decides.
#[derive(Debug, Default)]
pub struct LruTracker {
    /// Next tick to hand out
    tick: u64,
    /// Keys ordered by last access tick (oldest first)
    order: BTreeMap<u64, String>,
    /// Current tick of each tracked key
    positions: HashMap<String, u64>,
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks a key as most recently used.
    ///
    /// Existing keys are moved to the most recent position, new keys are
    /// added there.
    pub fn touch(&mut self, key: &str) {
        let tick = self.next_tick();
        match self.positions.get_mut(key) {
            Some(position) => {
                let previous = std::mem::replace(position, tick);
                if let Some(owned) = self.order.remove(&previous) {
                    self.order.insert(tick, owned);
                }
            }
            None => {
                self.positions.insert(key.to_string(), tick);
                self.order.insert(tick, key.to_string());
            }
        }
    }

    // == Remove ==
    /// Stops tracking a key. Returns false if it was not tracked.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.positions.remove(key) {
            Some(tick) => {
                self.order.remove(&tick);
                true
            }
            None => false,
        }
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        let (_, key) = self.order.pop_first()?;
        self.positions.remove(&key);
        Some(key)
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&str> {
        self.order.values().next().map(String::as_str)
    }

    // == Ordered Keys ==
    /// Tracked keys from least to most recently used.
    pub fn keys_oldest_first(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.values().map(String::as_str)
    }

    // == Clear ==
    /// Forgets every key. The tick counter keeps running.
    pub fn clear(&mut self) {
        self.order.clear();
        self.positions.clear();
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    fn next_tick(&mut self) -> u64 {
        let tick = self.tick;
        self.tick += 1;
        tick
    }

    /// Both indexes describe the same key set.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        self.order.len() == self.positions.len()
            && self
                .positions
                .iter()
                .all(|(key, tick)| self.order.get(tick) == Some(key))
    }
}
