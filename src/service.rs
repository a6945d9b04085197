//! Story Cache Service
//!
//! Read-through retrieval, pagination, and search over the newest-stories
//! universe. Composes the upstream client with the shared cache store: every
//! lookup consults the cache first and falls back to the upstream on miss,
//! populating the cache on the way out.
//!
//! There is no per-key in-flight marker: two concurrent misses on the same
//! key may both fetch upstream and both write the same value. That race is
//! correctness-preserving and accepted here.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore, EntryOptions, Priority};
use crate::client::HnClient;
use crate::config::Config;
use crate::models::Story;

/// Cache key for the id-list snapshot.
const NEW_STORIES_KEY: &str = "newstories";

// == Cached Value ==
/// Values sharing the one weight-bounded cache pool.
///
/// The store itself is generic and knows nothing about stories; this enum is
/// the service's view of what it keeps there.
#[derive(Debug, Clone)]
pub enum CachedValue {
    Ids(Arc<Vec<u64>>),
    Story(Story),
}

/// The process-wide cache pool shared by the service and the cleanup task.
pub type SharedCache = Arc<RwLock<CacheStore<CachedValue>>>;

// == Story Cache Service ==
pub struct StoryCacheService {
    client: HnClient,
    cache: SharedCache,
    story_ttl: Duration,
    story_sliding: Duration,
    ids_ttl: Duration,
    ids_sliding: Duration,
    search_window: usize,
    fetch_concurrency: usize,
}

impl StoryCacheService {
    // == Constructor ==
    /// Creates a service over an upstream client and a shared cache pool.
    pub fn new(client: HnClient, cache: SharedCache, config: &Config) -> Self {
        Self {
            client,
            cache,
            story_ttl: Duration::from_secs(config.story_ttl_secs),
            story_sliding: Duration::from_secs(config.story_sliding_secs),
            ids_ttl: Duration::from_secs(config.ids_ttl_secs),
            ids_sliding: Duration::from_secs(config.ids_sliding_secs),
            search_window: config.search_window.max(1),
            fetch_concurrency: config.fetch_concurrency.max(1),
        }
    }

    fn story_key(id: u64) -> String {
        format!("story_{}", id)
    }

    // == Get Story ==
    /// Read-through single-story lookup.
    ///
    /// On a cache miss the story is fetched upstream and cached with the
    /// configured absolute TTL and sliding window, weight 1, Normal priority.
    /// An absent upstream result is returned as `None` and not cached, so
    /// each miss re-queries the upstream.
    pub async fn get_story(&self, id: u64) -> Option<Story> {
        let key = Self::story_key(id);

        {
            let mut cache = self.cache.write().await;
            if let Some(CachedValue::Story(story)) = cache.get(&key) {
                return Some(story);
            }
        }

        let story = self.client.fetch_story(id).await?;

        let mut cache = self.cache.write().await;
        cache.set(
            key,
            CachedValue::Story(story.clone()),
            EntryOptions::new(self.story_ttl, self.story_sliding),
        );
        Some(story)
    }

    // == List Newest ==
    /// Returns the requested page of newest stories, in id-list order.
    ///
    /// Pages are 1-based; an out-of-range page yields an empty result. Ids
    /// in the page window are resolved with bounded concurrency, and any id
    /// that resolves to absent is skipped rather than failing the page.
    pub async fn newest_stories(&self, page: usize, page_size: usize) -> Vec<Story> {
        let ids = self.new_story_ids().await;
        let start = page.saturating_sub(1).saturating_mul(page_size);
        let page_ids: Vec<u64> = ids.iter().skip(start).take(page_size).copied().collect();

        debug!(
            page,
            page_size,
            resolved = page_ids.len(),
            "resolving newest-stories page"
        );

        stream::iter(page_ids)
            .map(|id| self.get_story(id))
            .buffered(self.fetch_concurrency)
            .filter_map(|story| async move { story })
            .collect()
            .await
    }

    // == Search ==
    /// Case-insensitive title substring search over a bounded recency window.
    ///
    /// Only the first `search_window` newest stories are considered; the
    /// filtered result is paginated with the same 1-based slicing rule as
    /// [`StoryCacheService::newest_stories`].
    pub async fn search_stories(&self, query: &str, page: usize, page_size: usize) -> Vec<Story> {
        let candidates = self.newest_stories(1, self.search_window).await;
        let needle = query.to_lowercase();

        candidates
            .into_iter()
            .filter(|story| story.title().to_lowercase().contains(&needle))
            .skip(page.saturating_sub(1).saturating_mul(page_size))
            .take(page_size)
            .collect()
    }

    // == Cache Stats ==
    /// Returns a snapshot of the shared cache statistics.
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    // == Id-List Snapshot ==
    /// Read-through fetch of the id-list snapshot.
    ///
    /// Cached under a dedicated key with High priority so it survives
    /// eviction pressure longer than individual stories. A failed upstream
    /// fetch yields an empty list, which is not cached: an outage should not
    /// be pinned in the cache for a full TTL.
    async fn new_story_ids(&self) -> Arc<Vec<u64>> {
        {
            let mut cache = self.cache.write().await;
            if let Some(CachedValue::Ids(ids)) = cache.get(NEW_STORIES_KEY) {
                return ids;
            }
        }

        let ids = Arc::new(self.client.fetch_new_story_ids().await);
        if ids.is_empty() {
            return ids;
        }

        let mut cache = self.cache.write().await;
        cache.set(
            NEW_STORIES_KEY.to_string(),
            CachedValue::Ids(Arc::clone(&ids)),
            EntryOptions::new(self.ids_ttl, self.ids_sliding).with_priority(Priority::High),
        );
        ids
    }
}
