//! Data models for the story cache service
//!
//! Holds the validated `Story` record plus the DTOs (Data Transfer Objects)
//! used for HTTP request parameters and auxiliary responses.

mod requests;
mod responses;
mod story;

pub use requests::{PageQuery, SearchQuery};
pub use responses::{HealthResponse, StatsResponse};
pub use story::Story;
