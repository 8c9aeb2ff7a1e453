//! Cache Key Convention
//!
//! Builds the structured keys that read-heavy services use to memoize query
//! results, and the patterns that invalidate them.
//!
//! A list key is the entity tag followed by every query parameter in a fixed
//! order, joined with `_`. Absent parameters are written as [`UNSPECIFIED`]
//! so the same query always yields the same key:
//!
//! ```
//! use query_cache::keys::QueryKey;
//!
//! let key = QueryKey::new("albums")
//!     .param(Some("u1"))
//!     .unspecified()
//!     .page(0)
//!     .size(10)
//!     .sort("title")
//!     .build();
//! assert_eq!(key, "albums_u1_all_page0_size10_sorttitle");
//! ```

use std::fmt::Display;

use crate::cache::WILDCARD;

/// Joins key segments
pub const KEY_SEPARATOR: &str = "_";

/// Stands in for a query parameter the caller did not supply
pub const UNSPECIFIED: &str = "all";

// == Query Key ==
/// Builder for list-query cache keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryKey {
    segments: Vec<String>,
}

impl QueryKey {
    /// Starts a key for the given entity tag, e.g. `"albums"`.
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            segments: vec![entity.into()],
        }
    }

    /// Appends an optional filter value. `None` and blank values become
    /// [`UNSPECIFIED`].
    pub fn param<T: Display>(mut self, value: Option<T>) -> Self {
        let segment = value
            .map(|v| v.to_string())
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| UNSPECIFIED.to_string());
        self.segments.push(segment);
        self
    }

    /// Appends the sentinel for an absent filter.
    pub fn unspecified(mut self) -> Self {
        self.segments.push(UNSPECIFIED.to_string());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.segments.push(format!("page{}", page));
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.segments.push(format!("size{}", size));
        self
    }

    pub fn sort(mut self, field: impl Display) -> Self {
        self.segments.push(format!("sort{}", field));
        self
    }

    pub fn build(self) -> String {
        self.segments.join(KEY_SEPARATOR)
    }
}

/// Key of a single-item cache entry, e.g. `item_key("album", 1)` is `"album_1"`.
pub fn item_key(entity: &str, id: impl Display) -> String {
    format!("{}{}{}", entity, KEY_SEPARATOR, id)
}

/// Pattern matching every list key of an entity, e.g. `"albums_*"`.
pub fn entity_pattern(entity: &str) -> String {
    format!("{}{}{}", entity, KEY_SEPARATOR, WILDCARD)
}
