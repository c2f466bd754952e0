//! In-process cache state backing the console API.
//!
//! Single node, interior mutability via `std::sync`; no lock is ever held
//! across an await point, handlers only do short synchronous sections.

pub mod transactions;

use contracts::config::{CacheConfigDto, ConfigUpdateRequest};
use contracts::stats::CacheStatsDto;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::{Duration, Instant};

use self::transactions::Operation;

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: String,
    pub expires_at: Option<Instant>,
    pub frequency: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("value of {required} bytes exceeds the memory budget of {max} bytes")]
    CapacityExceeded { required: u64, max: u64 },
}

/// A successful key lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupHit {
    pub value: String,
    pub ttl_remaining: Option<Duration>,
}

pub struct CacheStore {
    entries: RwLock<HashMap<String, CacheEntry>>,
    current_memory: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
    config: RwLock<CacheConfigDto>,
}

impl CacheStore {
    pub fn new(config: CacheConfigDto) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            current_memory: AtomicU64::new(0),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            config: RwLock::new(config),
        }
    }

    pub fn config(&self) -> CacheConfigDto {
        self.config.read().expect("config lock poisoned").clone()
    }

    /// Apply a partial update; absent fields keep their value. Returns the
    /// resulting configuration.
    pub fn apply_config_update(&self, update: &ConfigUpdateRequest) -> CacheConfigDto {
        let mut config = self.config.write().expect("config lock poisoned");
        if let Some(v) = update.max_memory {
            config.max_memory = v;
        }
        if let Some(v) = update.default_ttl {
            config.default_ttl = v;
        }
        if let Some(v) = update.frequency_threshold {
            config.frequency_threshold = v;
        }
        if let Some(v) = update.replication_factor {
            config.replication_factor = v;
        }
        if let Some(v) = update.enable_transactions {
            config.enable_transactions = v;
        }
        if let Some(v) = update.transaction_timeout {
            config.transaction_timeout = v;
        }
        config.clone()
    }

    /// Store a value. `ttl = None` falls back to the configured default TTL.
    ///
    /// When the memory budget would be exceeded, low-frequency entries are
    /// evicted until the value fits; a value larger than the whole budget is
    /// rejected.
    pub fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), StoreError> {
        let (max_memory, default_ttl) = {
            let config = self.config.read().expect("config lock poisoned");
            (config.max_memory, config.default_ttl)
        };
        let size = value.len() as u64;
        if size > max_memory {
            return Err(StoreError::CapacityExceeded {
                required: size,
                max: max_memory,
            });
        }

        let ttl = ttl.or(Some(Duration::from_secs(default_ttl)));
        let expires_at = ttl.map(|t| Instant::now() + t);

        let mut entries = self.entries.write().expect("entries lock poisoned");
        if let Some(old) = entries.remove(key) {
            self.current_memory
                .fetch_sub(old.value.len() as u64, Ordering::SeqCst);
        }

        while self.current_memory.load(Ordering::SeqCst) + size > max_memory {
            let victim = entries
                .iter()
                .min_by_key(|(_, e)| e.frequency)
                .map(|(k, _)| k.clone());
            match victim {
                Some(k) => {
                    if let Some(evicted) = entries.remove(&k) {
                        self.current_memory
                            .fetch_sub(evicted.value.len() as u64, Ordering::SeqCst);
                        tracing::debug!(key = %k, "evicted entry to free memory");
                    }
                }
                None => break,
            }
        }

        entries.insert(
            key.to_string(),
            CacheEntry {
                value: value.to_string(),
                expires_at,
                frequency: 0,
            },
        );
        self.current_memory.fetch_add(size, Ordering::SeqCst);
        Ok(())
    }

    /// Look a key up, counting the hit or miss. Expired entries are removed
    /// lazily and count as misses.
    pub fn get(&self, key: &str) -> Option<LookupHit> {
        let mut entries = self.entries.write().expect("entries lock poisoned");
        let expired = matches!(
            entries.get(key),
            Some(entry) if entry.expires_at.is_some_and(|at| at <= Instant::now())
        );
        if expired {
            if let Some(entry) = entries.remove(key) {
                self.current_memory
                    .fetch_sub(entry.value.len() as u64, Ordering::SeqCst);
            }
        }

        match entries.get_mut(key) {
            Some(entry) => {
                entry.frequency += 1;
                self.hits.fetch_add(1, Ordering::SeqCst);
                Some(LookupHit {
                    value: entry.value.clone(),
                    ttl_remaining: entry
                        .expires_at
                        .map(|at| at.saturating_duration_since(Instant::now())),
                })
            }
            None => {
                self.misses.fetch_add(1, Ordering::SeqCst);
                None
            }
        }
    }

    /// Remove an entry, returning it so a rolled-back eviction can restore it.
    pub fn evict(&self, key: &str) -> Option<CacheEntry> {
        let mut entries = self.entries.write().expect("entries lock poisoned");
        let entry = entries.remove(key)?;
        self.current_memory
            .fetch_sub(entry.value.len() as u64, Ordering::SeqCst);
        Some(entry)
    }

    pub fn stats(&self) -> CacheStatsDto {
        let entry_count = self.entries.read().expect("entries lock poisoned").len() as u64;
        CacheStatsDto {
            cache_hits: self.hits.load(Ordering::SeqCst),
            cache_misses: self.misses.load(Ordering::SeqCst),
            memory_usage: self.current_memory.load(Ordering::SeqCst),
            entry_count,
        }
    }

    pub fn current_memory(&self) -> u64 {
        self.current_memory.load(Ordering::SeqCst)
    }

    /// Apply the recorded operations of a committed transaction.
    /// Returns the number applied; a put that no longer fits is skipped.
    pub fn apply_commit(&self, operations: Vec<Operation>) -> usize {
        let mut applied = 0;
        for operation in operations {
            match operation {
                Operation::Put { key, value, ttl } => match self.put(&key, &value, ttl) {
                    Ok(()) => applied += 1,
                    Err(err) => {
                        tracing::warn!(key = %key, %err, "skipping committed put");
                    }
                },
                Operation::Evict { key, .. } => {
                    self.evict(&key);
                    applied += 1;
                }
            }
        }
        applied
    }

    /// Revert the recorded operations of a rolled-back transaction: puts are
    /// removed, evictions are restored with their original value and TTL.
    pub fn apply_rollback(&self, operations: Vec<Operation>) -> usize {
        let mut reverted = 0;
        for operation in operations {
            match operation {
                Operation::Put { key, .. } => {
                    self.evict(&key);
                    reverted += 1;
                }
                Operation::Evict { key, value, ttl } => match self.put(&key, &value, ttl) {
                    Ok(()) => reverted += 1,
                    Err(err) => {
                        tracing::warn!(key = %key, %err, "could not restore evicted entry");
                    }
                },
            }
        }
        reverted
    }

    /// Seed a handful of entries so stats and search have something to show
    /// during development.
    pub fn insert_test_data(&self) -> Result<usize, StoreError> {
        let samples = [
            ("session:ab12", r#"{"user":"alice","role":"admin"}"#),
            ("session:cd34", r#"{"user":"bob","role":"viewer"}"#),
            ("page:/pricing", "<html>cached pricing page</html>"),
            ("feature-flags", r#"{"dark_mode":true,"beta_search":false}"#),
            ("rate-limit:10.0.0.7", "42"),
        ];
        for (key, value) in samples {
            self.put(key, value, None)?;
        }
        Ok(samples.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> CacheConfigDto {
        CacheConfigDto {
            max_memory: 1024,
            default_ttl: 3600,
            frequency_threshold: 1,
            replication_factor: 2,
            enable_transactions: true,
            transaction_timeout: 30,
        }
    }

    #[test]
    fn test_put_get_counts_hit() {
        let store = CacheStore::new(test_config());
        store.put("k", "value", None).unwrap();

        let hit = store.get("k").unwrap();
        assert_eq!(hit.value, "value");
        assert!(hit.ttl_remaining.is_some());

        let stats = store.stats();
        assert_eq!(stats.cache_hits, 1);
        assert_eq!(stats.cache_misses, 0);
        assert_eq!(stats.entry_count, 1);
        assert_eq!(stats.memory_usage, 5);
    }

    #[test]
    fn test_missing_key_counts_miss() {
        let store = CacheStore::new(test_config());
        assert!(store.get("absent").is_none());
        assert_eq!(store.stats().cache_misses, 1);
    }

    #[test]
    fn test_expired_entry_is_a_miss() {
        let store = CacheStore::new(test_config());
        store
            .put("gone", "x", Some(Duration::from_secs(0)))
            .unwrap();
        assert!(store.get("gone").is_none());
        let stats = store.stats();
        assert_eq!(stats.cache_misses, 1);
        assert_eq!(stats.entry_count, 0);
        assert_eq!(stats.memory_usage, 0);
    }

    #[test]
    fn test_overwrite_reaccounts_memory() {
        let store = CacheStore::new(test_config());
        store.put("k", "aaaa", None).unwrap();
        store.put("k", "bb", None).unwrap();
        assert_eq!(store.current_memory(), 2);
        assert_eq!(store.stats().entry_count, 1);
    }

    #[test]
    fn test_oversized_value_rejected() {
        let store = CacheStore::new(test_config());
        let huge = "x".repeat(2048);
        let err = store.put("big", &huge, None).unwrap_err();
        assert!(matches!(err, StoreError::CapacityExceeded { .. }));
    }

    #[test]
    fn test_low_frequency_entry_evicted_under_pressure() {
        let mut config = test_config();
        config.max_memory = 10;
        let store = CacheStore::new(config);

        store.put("cold", "aaaaa", None).unwrap();
        store.put("hot", "bbbb", None).unwrap();
        store.get("hot").unwrap(); // hot: frequency 1, cold: frequency 0

        // 5 + 4 stored; 5 more does not fit, "cold" goes first.
        store.put("new", "ccccc", None).unwrap();
        assert!(store.get("cold").is_none());
        assert!(store.get("hot").is_some());
        assert!(store.get("new").is_some());
    }

    #[test]
    fn test_rollback_restores_eviction() {
        let store = CacheStore::new(test_config());
        store.put("k", "original", None).unwrap();
        let evicted = store.evict("k").unwrap();

        let reverted = store.apply_rollback(vec![Operation::Evict {
            key: "k".to_string(),
            value: evicted.value,
            ttl: Some(Duration::from_secs(60)),
        }]);
        assert_eq!(reverted, 1);
        assert_eq!(store.get("k").unwrap().value, "original");
    }

    #[test]
    fn test_commit_applies_put_and_evict() {
        let store = CacheStore::new(test_config());
        store.put("doomed", "x", None).unwrap();

        let applied = store.apply_commit(vec![
            Operation::Put {
                key: "fresh".to_string(),
                value: "v".to_string(),
                ttl: None,
            },
            Operation::Evict {
                key: "doomed".to_string(),
                value: "x".to_string(),
                ttl: None,
            },
        ]);
        assert_eq!(applied, 2);
        assert!(store.get("fresh").is_some());
        assert!(store.get("doomed").is_none());
    }

    #[test]
    fn test_config_update_applies_partially() {
        let store = CacheStore::new(test_config());
        let updated = store.apply_config_update(&ConfigUpdateRequest {
            default_ttl: Some(60),
            ..Default::default()
        });
        assert_eq!(updated.default_ttl, 60);
        assert_eq!(updated.max_memory, 1024);
    }
}
