//! Cache Module
//!
//! Provides a generic in-memory cache with dual (absolute + sliding)
//! expiration and weight-bounded, priority-aware eviction.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry, EntryOptions, Priority};
pub use stats::CacheStats;
pub use store::CacheStore;
