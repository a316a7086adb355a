//! Lookup Cache Module
//!
//! Short-lived keyed storage consulted before external lookups and
//! populated after them. Expiry is passive: an expired entry is
//! dropped by the read that finds it (a background sweep also prunes
//! entries nobody re-reads). There is no capacity bound and no
//! eviction policy beyond expiry.

use std::collections::HashMap;

use serde_json::Value;

use crate::cache::{CacheEntry, CacheStats};

// == Lookup Cache ==
/// TTL keyed store for external-lookup results.
///
/// Owned and injectable: constructed once at startup and shared via
/// application state, never a process-wide global.
#[derive(Debug)]
pub struct LookupCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance counters
    stats: CacheStats,
    /// TTL in seconds applied when a set does not specify one
    default_ttl: u64,
}

impl LookupCache {
    // == Constructor ==
    /// Creates an empty cache with the given default TTL in seconds.
    pub fn new(default_ttl: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl,
        }
    }

    // == Get ==
    /// Returns the cached value for `key` if present and not expired.
    ///
    /// A present-but-expired entry is removed and the read reported as
    /// a miss. A clean hit has no side effect beyond the stats bump.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired() {
                self.entries.remove(key);
                self.stats.record_expiration();
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                return None;
            }

            let value = entry.value.clone();
            self.stats.record_hit();
            Some(value)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Set ==
    /// Inserts or overwrites `key`, expiring `ttl` seconds from now
    /// (the default TTL when `ttl` is `None`). Overwriting resets the
    /// entry's expiry.
    pub fn set(&mut self, key: String, value: Value, ttl: Option<u64>) {
        let effective_ttl = ttl.unwrap_or(self.default_ttl);
        self.entries.insert(key, CacheEntry::new(value, effective_ttl));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Invalidate ==
    /// Removes one entry; returns whether anything was removed.
    pub fn invalidate(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Invalidate All ==
    /// Clears every entry; returns how many were removed.
    pub fn invalidate_all(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.stats.set_total_entries(0);
        count
    }

    // == Sweep Expired ==
    /// Removes all expired entries, returning how many were dropped.
    pub fn sweep_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
            self.stats.record_expiration();
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns a snapshot of the current counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Current number of entries, expired ones included until swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_cache_new() {
        let cache = LookupCache::new(300);
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_set_and_get() {
        let mut cache = LookupCache::new(300);

        cache.set("products:".to_string(), json!([{"id": 1}]), None);

        assert_eq!(cache.get("products:"), Some(json!([{"id": 1}])));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_get_absent() {
        let mut cache = LookupCache::new(300);
        assert_eq!(cache.get("nothing"), None);
    }

    #[test]
    fn test_cache_overwrite_replaces_value() {
        let mut cache = LookupCache::new(300);

        cache.set("k".to_string(), json!("first"), None);
        cache.set("k".to_string(), json!("second"), None);

        assert_eq!(cache.get("k"), Some(json!("second")));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_ttl_expiration_on_read() {
        let mut cache = LookupCache::new(300);

        cache.set("k".to_string(), json!("v"), Some(1));
        assert!(cache.get("k").is_some());

        sleep(Duration::from_millis(1100));

        // The expired read removes the entry.
        assert_eq!(cache.get("k"), None);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_cache_invalidate_one() {
        let mut cache = LookupCache::new(300);

        cache.set("a".to_string(), json!(1), None);
        cache.set("b".to_string(), json!(2), None);

        assert!(cache.invalidate("a"));
        assert!(!cache.invalidate("a"));

        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), Some(json!(2)));
    }

    #[test]
    fn test_cache_invalidate_all() {
        let mut cache = LookupCache::new(300);

        cache.set("a".to_string(), json!(1), None);
        cache.set("b".to_string(), json!(2), None);

        assert_eq!(cache.invalidate_all(), 2);
        assert!(cache.is_empty());
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), None);
    }

    #[test]
    fn test_cache_sweep_expired() {
        let mut cache = LookupCache::new(300);

        cache.set("short".to_string(), json!(1), Some(1));
        cache.set("long".to_string(), json!(2), Some(60));

        sleep(Duration::from_millis(1100));

        assert_eq!(cache.sweep_expired(), 1);
        assert_eq!(cache.len(), 1);
        assert!(cache.get("long").is_some());
    }

    #[test]
    fn test_cache_stats_counters() {
        let mut cache = LookupCache::new(300);

        cache.set("k".to_string(), json!("v"), None);
        cache.get("k"); // hit
        cache.get("absent"); // miss

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_cache_expired_read_counts_miss_and_expiration() {
        let mut cache = LookupCache::new(300);

        cache.set("k".to_string(), json!("v"), Some(1));
        sleep(Duration::from_millis(1100));
        assert_eq!(cache.get("k"), None);

        let stats = cache.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.expirations, 1);
        assert_eq!(stats.hits, 0);
    }
}
