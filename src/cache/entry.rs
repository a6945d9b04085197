//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with dual
//! (absolute + sliding) expiration, a size weight, and an eviction priority.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Eviction Priority ==
/// Relative eviction priority of a cache entry.
///
/// Under capacity pressure, lower priorities are evicted before higher ones;
/// recency only breaks ties within a priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Normal,
    High,
}

// == Entry Options ==
/// Expiration and eviction parameters applied when an entry is inserted.
#[derive(Debug, Clone)]
pub struct EntryOptions {
    /// Absolute time-to-live; the entry is invalid once this elapses,
    /// regardless of access activity.
    pub absolute_ttl: Duration,
    /// Sliding window; the entry is invalid once this much time passes
    /// without a successful read.
    pub sliding_window: Duration,
    /// Size weight counted against the store's total weight ceiling.
    pub weight: u64,
    /// Eviction priority.
    pub priority: Priority,
}

impl EntryOptions {
    /// Creates options with the given expirations, weight 1 and Normal priority.
    pub fn new(absolute_ttl: Duration, sliding_window: Duration) -> Self {
        Self {
            absolute_ttl,
            sliding_window,
            weight: 1,
            priority: Priority::Normal,
        }
    }

    /// Sets the size weight.
    pub fn with_weight(mut self, weight: u64) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the eviction priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

// == Cache Entry ==
/// A single cache entry with its value and expiration metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Last successful read timestamp (Unix milliseconds)
    pub last_accessed: u64,
    /// Absolute expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
    /// Sliding window in milliseconds
    pub sliding_window_ms: u64,
    /// Size weight counted against the store ceiling
    pub weight: u64,
    /// Eviction priority
    pub priority: Priority,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry from a value and insertion options.
    pub fn new(value: V, options: &EntryOptions) -> Self {
        let now = current_timestamp_ms();
        Self {
            value,
            created_at: now,
            last_accessed: now,
            expires_at: now + options.absolute_ttl.as_millis() as u64,
            sliding_window_ms: options.sliding_window.as_millis() as u64,
            weight: options.weight,
            priority: options.priority,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has expired under either rule.
    ///
    /// Boundary condition: the entry is expired once the current time is
    /// greater than or equal to the absolute deadline, or greater than or
    /// equal to `last_accessed + sliding_window`. A read that observes the
    /// entry as live renews the sliding deadline via [`CacheEntry::touch`],
    /// but the absolute deadline never moves.
    pub fn is_expired(&self) -> bool {
        let now = current_timestamp_ms();
        now >= self.expires_at || now >= self.last_accessed + self.sliding_window_ms
    }

    // == Touch ==
    /// Renews the sliding window after a successful read.
    pub fn touch(&mut self) {
        self.last_accessed = current_timestamp_ms();
    }

    /// Returns remaining time in milliseconds until the nearer of the two
    /// deadlines, or 0 if already expired.
    pub fn ttl_remaining_ms(&self) -> u64 {
        let now = current_timestamp_ms();
        let deadline = self
            .expires_at
            .min(self.last_accessed + self.sliding_window_ms);
        deadline.saturating_sub(now)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
