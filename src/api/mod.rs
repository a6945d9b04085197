//! API Module
//!
//! HTTP handlers and routing for the stories REST API.
//!
//! # Endpoints
//! - `GET /api/stories/newest` - Page of newest stories
//! - `GET /api/stories/search` - Page of title matches
//! - `GET /api/stories/:id` - Single story by id
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
