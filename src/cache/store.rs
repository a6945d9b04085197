//! Cache Store Module
//!
//! Generic weight-bounded key-value store with dual expiration and
//! priority-weighted eviction.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, EntryOptions, Priority};

// == Cache Store ==
/// Weight-bounded cache with absolute + sliding expiration.
///
/// Every entry carries a weight counted against `max_weight`. When an insert
/// pushes total weight past the ceiling, entries are evicted (expired first,
/// then lowest priority, then least recently used) until usage drops to
/// `compaction_fraction * max_weight`.
///
/// Expiration is enforced at read time; the background cleanup task only
/// reclaims memory earlier than a read would.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// Total weight of all stored entries
    total_weight: u64,
    /// Total weight ceiling
    max_weight: u64,
    /// Target utilization after compaction, in (0, 1]
    compaction_fraction: f64,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore with the given weight ceiling and compaction
    /// target.
    ///
    /// # Arguments
    /// * `max_weight` - Total weight the cache may hold
    /// * `compaction_fraction` - Fraction of `max_weight` to shrink to when
    ///   the ceiling is exceeded (clamped to (0, 1])
    pub fn new(max_weight: u64, compaction_fraction: f64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            total_weight: 0,
            max_weight,
            compaction_fraction: compaction_fraction.clamp(0.0, 1.0),
        }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the value only if the entry is unexpired under both the
    /// absolute and the sliding rule; a hit renews the sliding window.
    /// An expired entry is purged and reported as absent.
    pub fn get(&mut self, key: &str) -> Option<V> {
        match self.entries.get_mut(key) {
            Some(entry) if entry.is_expired() => {}
            Some(entry) => {
                entry.touch();
                let value = entry.value.clone();
                self.stats.record_hit();
                return Some(value);
            }
            None => {
                self.stats.record_miss();
                return None;
            }
        }

        // Expired: purge the entry and report it absent.
        if let Some(entry) = self.entries.remove(key) {
            self.total_weight -= entry.weight;
            self.stats.record_expired();
        }
        self.stats.record_miss();
        self.update_usage();
        None
    }

    // == Set ==
    /// Inserts or replaces a key-value pair.
    ///
    /// Replacing a key resets both expiration deadlines. If the insert pushes
    /// total weight past the ceiling, the store compacts itself; insertion
    /// never fails.
    pub fn set(&mut self, key: String, value: V, options: EntryOptions) {
        let entry = CacheEntry::new(value, &options);
        let new_weight = entry.weight;

        if let Some(old) = self.entries.insert(key, entry) {
            self.total_weight -= old.weight;
        }
        self.total_weight += new_weight;

        if self.total_weight > self.max_weight {
            self.compact();
        }
        self.update_usage();
    }

    // == Remove ==
    /// Removes an entry by key. Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &str) {
        if let Some(entry) = self.entries.remove(key) {
            self.total_weight -= entry.weight;
            self.update_usage();
        }
    }

    // == Clear ==
    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.total_weight = 0;
        self.update_usage();
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            if let Some(entry) = self.entries.remove(&key) {
                self.total_weight -= entry.weight;
                self.stats.record_expired();
            }
        }

        self.update_usage();
        count
    }

    // == Compact ==
    /// Evicts entries until total weight drops to the compaction target.
    ///
    /// Expired entries go first; the rest are ordered by priority (Low before
    /// Normal before High) and, within a priority, by last access time.
    fn compact(&mut self) {
        let target = (self.max_weight as f64 * self.compaction_fraction) as u64;

        self.cleanup_expired();
        if self.total_weight <= target {
            return;
        }

        let mut candidates: Vec<(Priority, u64, String)> = self
            .entries
            .iter()
            .map(|(key, entry)| (entry.priority, entry.last_accessed, key.clone()))
            .collect();
        candidates.sort();

        let mut evicted = 0usize;
        for (_, _, key) in candidates {
            if self.total_weight <= target {
                break;
            }
            if let Some(entry) = self.entries.remove(&key) {
                self.total_weight -= entry.weight;
                self.stats.record_eviction();
                evicted += 1;
            }
        }

        debug!(evicted, total_weight = self.total_weight, "cache compacted");
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_usage(self.entries.len(), self.total_weight);
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Total Weight ==
    /// Returns the combined weight of all stored entries.
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    fn update_usage(&mut self) {
        self.stats.set_usage(self.entries.len(), self.total_weight);
    }
}
