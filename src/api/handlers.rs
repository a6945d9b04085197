//! API Handlers
//!
//! HTTP request handlers for each stories endpoint. The handlers only
//! validate parameters and delegate to the service; upstream outages never
//! surface as errors here, only as shorter result lists.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::{Result, ServiceError};
use crate::models::{HealthResponse, PageQuery, SearchQuery, StatsResponse, Story};
use crate::service::StoryCacheService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The story cache service; owns the upstream client and the cache pool
    pub service: Arc<StoryCacheService>,
}

impl AppState {
    /// Creates a new AppState wrapping the given service.
    pub fn new(service: StoryCacheService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Handler for GET /api/stories/newest
///
/// Returns the requested page of newest stories.
pub async fn newest_stories_handler(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<Json<Vec<Story>>> {
    if let Some(error_msg) = params.validate() {
        return Err(ServiceError::InvalidRequest(error_msg));
    }

    let stories = state
        .service
        .newest_stories(params.page, params.page_size)
        .await;
    Ok(Json(stories))
}

/// Handler for GET /api/stories/search
///
/// Returns the requested page of title matches within the candidate window.
pub async fn search_stories_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<Story>>> {
    if let Some(error_msg) = params.validate() {
        return Err(ServiceError::InvalidRequest(error_msg));
    }

    let stories = state
        .service
        .search_stories(&params.query, params.page, params.page_size)
        .await;
    Ok(Json(stories))
}

/// Handler for GET /api/stories/:id
///
/// Returns the story or 404 if the upstream has no such item.
pub async fn story_by_id_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Story>> {
    match state.service.get_story(id).await {
        Some(story) => Ok(Json(story)),
        None => Err(ServiceError::StoryNotFound(id)),
    }
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.service.cache_stats().await;
    Json(StatsResponse::from_stats(&stats))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
