//! hn_cache - A read-through caching service for Hacker News newest stories
//!
//! Mediates between paginated list/search requests and the upstream item
//! API using a weight-bounded cache with dual (absolute + sliding)
//! expiration and priority-aware eviction.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod tasks;

pub use api::AppState;
pub use client::HnClient;
pub use config::Config;
pub use service::StoryCacheService;
pub use tasks::spawn_cleanup_task;
