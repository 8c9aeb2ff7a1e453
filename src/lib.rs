//! Query Cache - bounded in-process memoization for read-heavy services
//!
//! Provides a thread-safe LRU cache keyed by structured query strings, with
//! point and prefix-pattern invalidation, plus an HTTP admin surface.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod keys;
pub mod memo;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::BoundedCache;
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::spawn_stats_reporter;
