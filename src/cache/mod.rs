//! Cache Module
//!
//! Provides a bounded in-process memoization cache with LRU eviction and
//! prefix-pattern invalidation.

mod bounded;
mod entry;
mod lru;
mod pattern;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use bounded::BoundedCache;
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use pattern::{EvictionPattern, PatternKind};
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Trailing wildcard sentinel accepted by pattern eviction
pub const WILDCARD: char = '*';

/// Capacity used when none is configured
pub const DEFAULT_CAPACITY: usize = 100;
