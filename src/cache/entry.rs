//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

// == Cache Entry ==
/// A single memoized value and its bookkeeping timestamps.
///
/// The value is opaque to the cache: it is stored, cloned out on reads and
/// replaced on writes, never inspected.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: i64,
    /// Last write timestamp (Unix milliseconds)
    pub updated_at: i64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: V) -> Self {
        let now = current_timestamp_ms();
        Self {
            value,
            created_at: now,
            updated_at: now,
        }
    }

    // == Replace ==
    /// Swaps in a new value, keeping the creation time.
    ///
    /// Returns the previous value.
    pub fn replace(&mut self, value: V) -> V {
        self.updated_at = current_timestamp_ms();
        std::mem::replace(&mut self.value, value)
    }

    // == Age ==
    /// Milliseconds since the entry was first inserted.
    pub fn age_ms(&self) -> i64 {
        (current_timestamp_ms() - self.created_at).max(0)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
