//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store against a simple reference model and the
//! shared cache under concurrent use.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::thread;

use crate::cache::{BoundedCache, CacheStore};

// == Strategies ==
/// Keys drawn from a small space so operations collide often
fn key_strategy() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["albums", "tracks", "playlists"]),
        0u8..6,
    )
        .prop_map(|(entity, n)| format!("{}_{}", entity, n))
}

fn pattern_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec!["albums_*", "tracks_*", "playlists_*", "*"])
            .prop_map(str::to_string),
        key_strategy(),
        key_strategy().prop_map(|key| format!("{}*x", key)),
    ]
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: String, value: u32 },
    Get { key: String },
    ContainsKey { key: String },
    Evict { key: String },
    EvictByPattern { pattern: String },
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), any::<u32>()).prop_map(|(key, value)| CacheOp::Put { key, value }),
        3 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        2 => key_strategy().prop_map(|key| CacheOp::ContainsKey { key }),
        2 => key_strategy().prop_map(|key| CacheOp::Evict { key }),
        1 => pattern_strategy().prop_map(|pattern| CacheOp::EvictByPattern { pattern }),
        1 => Just(CacheOp::Clear),
    ]
}

// == Reference Model ==
/// Straightforward LRU: `order` holds keys least recent first.
struct ModelCache {
    capacity: usize,
    order: Vec<String>,
    values: HashMap<String, u32>,
}

impl ModelCache {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            order: Vec::new(),
            values: HashMap::new(),
        }
    }

    fn promote(&mut self, key: &str) {
        self.order.retain(|k| k != key);
        self.order.push(key.to_string());
    }

    fn put(&mut self, key: &str, value: u32) {
        if !self.values.contains_key(key) && self.values.len() >= self.capacity {
            let oldest = self.order.remove(0);
            self.values.remove(&oldest);
        }
        self.values.insert(key.to_string(), value);
        self.promote(key);
    }

    fn get(&mut self, key: &str) -> Option<u32> {
        let value = self.values.get(key).copied()?;
        self.promote(key);
        Some(value)
    }

    fn evict(&mut self, key: &str) -> bool {
        self.order.retain(|k| k != key);
        self.values.remove(key).is_some()
    }

    fn evict_prefix(&mut self, pattern: &str) -> usize {
        let prefix = match pattern.strip_suffix('*') {
            Some(prefix) if !prefix.contains('*') => prefix,
            _ => pattern,
        };
        let before = self.values.len();
        self.order.retain(|k| !k.starts_with(prefix));
        self.values.retain(|k, _| !k.starts_with(prefix));
        before - self.values.len()
    }

    fn clear(&mut self) {
        self.order.clear();
        self.values.clear();
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Every operation agrees with the reference model, including the exact
    // recency order that decides the next eviction.
    #[test]
    fn prop_matches_reference_model(
        capacity in 1usize..8,
        ops in prop::collection::vec(cache_op_strategy(), 1..120)
    ) {
        let mut store = CacheStore::new(capacity).unwrap();
        let mut model = ModelCache::new(capacity);

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    store.put(key.clone(), value);
                    model.put(&key, value);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(store.get(&key).copied(), model.get(&key));
                }
                CacheOp::ContainsKey { key } => {
                    prop_assert_eq!(store.contains_key(&key), model.values.contains_key(&key));
                }
                CacheOp::Evict { key } => {
                    prop_assert_eq!(store.evict(&key), model.evict(&key));
                }
                CacheOp::EvictByPattern { pattern } => {
                    prop_assert_eq!(store.evict_by_pattern(&pattern), model.evict_prefix(&pattern));
                }
                CacheOp::Clear => {
                    store.clear();
                    model.clear();
                }
            }

            prop_assert!(store.len() <= capacity);
            prop_assert_eq!(store.keys_by_recency(), model.order.clone());
            prop_assert!(store.is_consistent());
        }
    }

    // Distinct-key puts never push the store past its capacity.
    #[test]
    fn prop_capacity_bound(
        capacity in 1usize..50,
        keys in prop::collection::hash_set("[a-z]{1,12}", 1..200)
    ) {
        let mut store = CacheStore::new(capacity).unwrap();

        for (i, key) in keys.into_iter().enumerate() {
            store.put(key, i);
            prop_assert!(
                store.len() <= capacity,
                "Cache size {} exceeds capacity {}",
                store.len(),
                capacity
            );
        }
    }

    // Pattern eviction removes exactly the keys under the prefix.
    #[test]
    fn prop_pattern_eviction_scope(
        keys in prop::collection::hash_set(key_strategy(), 1..18),
        entity in prop::sample::select(vec!["albums", "tracks", "playlists"])
    ) {
        let mut store = CacheStore::new(64).unwrap();
        for key in &keys {
            store.put(key.clone(), ());
        }

        let prefix = format!("{}_", entity);
        let expected_removed = keys.iter().filter(|k| k.starts_with(&prefix)).count();

        let removed = store.evict_by_pattern(&format!("{}*", prefix));

        prop_assert_eq!(removed, expected_removed);
        let remaining: HashSet<String> = keys
            .into_iter()
            .filter(|k| !k.starts_with(&prefix))
            .collect();
        prop_assert_eq!(store.keys(), remaining);
    }

    // Overwriting a key keeps one entry holding the newest value.
    #[test]
    fn prop_replace_not_grow(
        key in key_strategy(),
        values in prop::collection::vec(any::<u32>(), 1..10)
    ) {
        let mut store = CacheStore::new(1).unwrap();
        let last = *values.last().unwrap();

        for value in values {
            store.put(key.clone(), value);
        }

        prop_assert_eq!(store.len(), 1);
        prop_assert_eq!(store.get(&key).copied(), Some(last));
    }
}

// Concurrent runs are expensive, fewer cases
proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    // Threads replaying random interleaved operations never break the bound
    // or desynchronize the entry count from the recency index.
    #[test]
    fn prop_concurrent_ops_keep_invariants(
        capacity in 1usize..6,
        workloads in prop::collection::vec(
            prop::collection::vec(cache_op_strategy(), 1..200),
            2..6
        )
    ) {
        let cache = Arc::new(BoundedCache::new(capacity).unwrap());

        let handles: Vec<_> = workloads
            .into_iter()
            .map(|ops| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for op in ops {
                        match op {
                            CacheOp::Put { key, value } => cache.put(key, value),
                            CacheOp::Get { key } => {
                                cache.get(&key);
                            }
                            CacheOp::ContainsKey { key } => {
                                cache.contains_key(&key);
                            }
                            CacheOp::Evict { key } => {
                                cache.evict(&key);
                            }
                            CacheOp::EvictByPattern { pattern } => {
                                cache.evict_by_pattern(&pattern);
                            }
                            CacheOp::Clear => cache.clear(),
                        }
                        assert!(cache.len() <= capacity);
                    }
                })
            })
            .collect();

        for handle in handles {
            prop_assert!(handle.join().is_ok());
        }

        prop_assert!(cache.len() <= capacity);
        prop_assert_eq!(cache.keys().len(), cache.len());
        prop_assert!(cache.is_consistent());
    }
}
