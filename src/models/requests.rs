//! Request DTOs for the stories API
//!
//! Defines the structure of incoming query parameters.

use serde::Deserialize;

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    20
}

/// Query parameters for the newest-stories listing.
///
/// Page numbering is 1-based; both values must be positive.
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl PageQuery {
    /// Validates the query parameters.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.page == 0 {
            return Some("page must be a positive integer".to_string());
        }
        if self.page_size == 0 {
            return Some("page_size must be a positive integer".to_string());
        }
        None
    }
}

/// Query parameters for the search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    /// Case-insensitive substring matched against story titles
    pub query: String,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl SearchQuery {
    /// Validates the query parameters.
    pub fn validate(&self) -> Option<String> {
        if self.page == 0 {
            return Some("page must be a positive integer".to_string());
        }
        if self.page_size == 0 {
            return Some("page_size must be a positive integer".to_string());
        }
        None
    }
}
