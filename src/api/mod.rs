//! API Module
//!
//! HTTP handlers and routing for the cache admin API.
//!
//! # Endpoints
//! - `PUT /cache/entries` - Cache a JSON value under a key
//! - `GET /cache/entries/:key` - Read a cached value
//! - `GET /cache/entries/:key/exists` - Membership check (no recency change)
//! - `DELETE /cache/entries/:key` - Evict one key
//! - `DELETE /cache/entries?pattern=albums_*` - Evict by prefix pattern
//! - `DELETE /cache` - Clear the cache
//! - `GET /cache/keys` - List cached keys
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
