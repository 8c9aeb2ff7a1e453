//! API Handlers
//!
//! HTTP request handlers for each cache admin endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::cache::BoundedCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    ClearResponse, EvictResponse, ExistsResponse, GetResponse, HealthResponse, KeysResponse,
    PatternEvictResponse, PatternQuery, SetRequest, SetResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// The cache synchronizes itself, so handlers share it through a plain `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide memoization cache
    pub cache: Arc<BoundedCache<Value>>,
}

impl AppState {
    /// Creates a new AppState around an existing cache.
    pub fn new(cache: BoundedCache<Value>) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// # Errors
    /// Fails if the configured capacity is zero.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(BoundedCache::new(config.capacity)?))
    }
}

/// Handler for PUT /cache/entries
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    state.cache.put(req.key.clone(), req.value);

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /cache/entries/:key
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let value = state
        .cache
        .get(&key)
        .ok_or_else(|| CacheError::NotFound(key.clone()))?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for GET /cache/entries/:key/exists
pub async fn exists_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<ExistsResponse> {
    let exists = state.cache.contains_key(&key);
    Json(ExistsResponse { key, exists })
}

/// Handler for DELETE /cache/entries/:key
///
/// Idempotent: a missing key is reported with `removed: false`, not an error.
pub async fn evict_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<EvictResponse> {
    let removed = state.cache.evict(&key);
    Json(EvictResponse { key, removed })
}

/// Handler for DELETE /cache/entries?pattern=...
///
/// A missing `pattern` parameter is rejected with a JSON error body.
pub async fn evict_pattern_handler(
    State(state): State<AppState>,
    query: Option<Query<PatternQuery>>,
) -> Result<Json<PatternEvictResponse>> {
    let Some(Query(query)) = query else {
        return Err(CacheError::InvalidRequest(
            "Missing 'pattern' query parameter".to_string(),
        ));
    };

    let removed = state.cache.evict_by_pattern(&query.pattern);
    Ok(Json(PatternEvictResponse {
        pattern: query.pattern,
        removed,
    }))
}

/// Handler for DELETE /cache
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    state.cache.clear();
    info!("Cache cleared via admin API");
    Json(ClearResponse::cleared())
}

/// Handler for GET /cache/keys
pub async fn keys_handler(State(state): State<AppState>) -> Json<KeysResponse> {
    Json(KeysResponse::new(state.cache.keys()))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
