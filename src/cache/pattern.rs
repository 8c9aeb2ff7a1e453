//! Eviction Pattern Module
//!
//! Parses the `prefix*` patterns used for bulk invalidation.

use tracing::warn;

use crate::cache::WILDCARD;

// == Pattern Kind ==
/// How a raw pattern string was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Literal prefix followed by a single trailing wildcard
    Wildcard,
    /// No wildcard at all; the whole string is used as a prefix
    Literal,
    /// Wildcard in an unsupported position; matched literally, `*` included
    Malformed,
}

// == Eviction Pattern ==
/// A parsed eviction pattern.
///
/// Only one form is understood: a literal prefix followed by exactly one
/// trailing wildcard, e.g. `albums_*`. Anything else is matched as a
/// literal prefix with no wildcard interpretation. Parsing never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvictionPattern {
    prefix: String,
    kind: PatternKind,
}

impl EvictionPattern {
    // == Parse ==
    /// Interprets a raw pattern string.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_suffix(WILDCARD) {
            Some(prefix) if !prefix.contains(WILDCARD) => Self {
                prefix: prefix.to_string(),
                kind: PatternKind::Wildcard,
            },
            _ if raw.contains(WILDCARD) => {
                warn!(
                    "Unsupported wildcard placement in pattern '{}', matching it literally",
                    raw
                );
                Self {
                    prefix: raw.to_string(),
                    kind: PatternKind::Malformed,
                }
            }
            _ => Self {
                prefix: raw.to_string(),
                kind: PatternKind::Literal,
            },
        }
    }

    // == Matches ==
    /// Returns true if `key` falls under this pattern.
    pub fn matches(&self, key: &str) -> bool {
        key.starts_with(&self.prefix)
    }

    /// The literal prefix keys are compared against.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }
}
