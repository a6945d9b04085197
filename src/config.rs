//! Configuration Module
//!
//! Handles loading and managing service configuration from environment
//! variables.

use std::env;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream Hacker News API base URL (no trailing slash)
    pub base_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Total cache weight ceiling
    pub cache_max_weight: u64,
    /// Target utilization the cache shrinks to once the ceiling is exceeded
    pub compaction_fraction: f64,
    /// Absolute TTL in seconds for cached stories
    pub story_ttl_secs: u64,
    /// Sliding expiration window in seconds for cached stories
    pub story_sliding_secs: u64,
    /// Absolute TTL in seconds for the cached id-list snapshot
    pub ids_ttl_secs: u64,
    /// Sliding expiration window in seconds for the id-list snapshot
    pub ids_sliding_secs: u64,
    /// Background expiry scan interval in seconds
    pub cleanup_interval_secs: u64,
    /// Number of newest stories search operates over
    pub search_window: usize,
    /// Maximum concurrent upstream item fetches per page
    pub fetch_concurrency: usize,
    /// Per-request upstream timeout in seconds
    pub request_timeout_secs: u64,
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `HN_BASE_URL` - Upstream API base URL
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_MAX_WEIGHT` - Cache weight ceiling (default: 1000)
    /// - `CACHE_COMPACTION_FRACTION` - Post-compaction utilization (default: 0.8)
    /// - `STORY_TTL_SECS` / `STORY_SLIDING_SECS` - Story expirations (300 / 120)
    /// - `IDS_TTL_SECS` / `IDS_SLIDING_SECS` - Id-list expirations (300 / 120)
    /// - `CLEANUP_INTERVAL_SECS` - Expiry scan interval (default: 60)
    /// - `SEARCH_WINDOW` - Search candidate window (default: 200)
    /// - `FETCH_CONCURRENCY` - Concurrent item fetches (default: 8)
    /// - `REQUEST_TIMEOUT_SECS` - Upstream request timeout (default: 10)
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("HN_BASE_URL")
                .unwrap_or_else(|_| "https://hacker-news.firebaseio.com/v0".to_string()),
            server_port: env_parse("SERVER_PORT", 3000),
            cache_max_weight: env_parse("CACHE_MAX_WEIGHT", 1000),
            compaction_fraction: env_parse("CACHE_COMPACTION_FRACTION", 0.8),
            story_ttl_secs: env_parse("STORY_TTL_SECS", 300),
            story_sliding_secs: env_parse("STORY_SLIDING_SECS", 120),
            ids_ttl_secs: env_parse("IDS_TTL_SECS", 300),
            ids_sliding_secs: env_parse("IDS_SLIDING_SECS", 120),
            cleanup_interval_secs: env_parse("CLEANUP_INTERVAL_SECS", 60),
            search_window: env_parse("SEARCH_WINDOW", 200),
            fetch_concurrency: env_parse("FETCH_CONCURRENCY", 8),
            request_timeout_secs: env_parse("REQUEST_TIMEOUT_SECS", 10),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://hacker-news.firebaseio.com/v0".to_string(),
            server_port: 3000,
            cache_max_weight: 1000,
            compaction_fraction: 0.8,
            story_ttl_secs: 300,
            story_sliding_secs: 120,
            ids_ttl_secs: 300,
            ids_sliding_secs: 120,
            cleanup_interval_secs: 60,
            search_window: 200,
            fetch_concurrency: 8,
            request_timeout_secs: 10,
        }
    }
}
