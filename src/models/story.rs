//! Story Model
//!
//! The validated, immutable record for a single Hacker News item.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, ServiceError};

// == Story ==
/// A single story as served by the upstream item endpoint.
///
/// Title and URL validity are enforced when the record is constructed —
/// including on the deserialization path, which funnels through
/// [`Story::new`] via `try_from`. Fields are private; once built, a story
/// never changes (re-fetches replace the whole record).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStory")]
pub struct Story {
    id: u64,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    by: String,
    score: i64,
    time: i64,
    descendants: u32,
    #[serde(rename = "type")]
    kind: String,
}

impl Story {
    // == Constructor ==
    /// Creates a validated story with the default type tag `"story"`.
    ///
    /// # Errors
    /// - [`ServiceError::EmptyTitle`] if the title is empty or whitespace-only
    /// - [`ServiceError::InvalidUrl`] if a URL is given and does not parse as
    ///   an absolute URL
    pub fn new(
        id: u64,
        title: impl Into<String>,
        url: Option<String>,
        by: impl Into<String>,
        score: i64,
        time: i64,
        descendants: u32,
    ) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ServiceError::EmptyTitle);
        }

        if let Some(ref raw) = url {
            if Url::parse(raw).is_err() {
                return Err(ServiceError::InvalidUrl(raw.clone()));
            }
        }

        Ok(Self {
            id,
            title,
            url,
            by: by.into(),
            score,
            time,
            descendants,
            kind: "story".to_string(),
        })
    }

    /// Replaces the type tag (free-form, e.g. `"job"`).
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    // == Accessors ==
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn by(&self) -> &str {
        &self.by
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn time(&self) -> i64 {
        self.time
    }

    pub fn descendants(&self) -> u32 {
        self.descendants
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }
}

// == Wire Format ==
/// Unvalidated shape of the upstream item payload.
#[derive(Debug, Deserialize)]
struct RawStory {
    id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    by: String,
    #[serde(default)]
    score: i64,
    #[serde(default)]
    time: i64,
    #[serde(default)]
    descendants: u32,
    #[serde(rename = "type", default = "default_kind")]
    kind: String,
}

fn default_kind() -> String {
    "story".to_string()
}

impl TryFrom<RawStory> for Story {
    type Error = ServiceError;

    fn try_from(raw: RawStory) -> Result<Self> {
        Ok(Story::new(
            raw.id,
            raw.title,
            raw.url,
            raw.by,
            raw.score,
            raw.time,
            raw.descendants,
        )?
        .with_kind(raw.kind))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_valid_construction() {
        let story = Story::new(
            1,
            "Test Story",
            Some("https://test.com".to_string()),
            "testuser",
            100,
            1_700_000_000,
            5,
        )
        .unwrap();

        assert_eq!(story.id(), 1);
        assert_eq!(story.title(), "Test Story");
        assert_eq!(story.url(), Some("https://test.com"));
        assert_eq!(story.by(), "testuser");
        assert_eq!(story.score(), 100);
        assert_eq!(story.descendants(), 5);
        assert_eq!(story.kind(), "story");
    }

    #[test]
    fn test_story_empty_title_rejected() {
        let result = Story::new(1, "", None, "user", 0, 0, 0);
        assert!(matches!(result, Err(ServiceError::EmptyTitle)));
    }

    #[test]
    fn test_story_whitespace_title_rejected() {
        let result = Story::new(1, "   ", None, "user", 0, 0, 0);
        assert!(matches!(result, Err(ServiceError::EmptyTitle)));
    }

    #[test]
    fn test_story_invalid_url_rejected() {
        let result = Story::new(1, "Title", Some("invalid-url".to_string()), "user", 0, 0, 0);
        assert!(matches!(result, Err(ServiceError::InvalidUrl(_))));
    }

    #[test]
    fn test_story_absent_url_accepted() {
        let story = Story::new(1, "Ask HN: something?", None, "user", 10, 0, 2).unwrap();
        assert_eq!(story.url(), None);
    }

    #[test]
    fn test_story_deserialize_valid_payload() {
        let json = r#"{
            "id": 8863,
            "title": "My YC app",
            "url": "http://www.example.com/",
            "by": "dhouston",
            "score": 111,
            "time": 1175714200,
            "descendants": 71,
            "type": "story"
        }"#;

        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.id(), 8863);
        assert_eq!(story.title(), "My YC app");
        assert_eq!(story.by(), "dhouston");
    }

    #[test]
    fn test_story_deserialize_missing_title_fails() {
        let json = r#"{"id": 1, "by": "user", "score": 10}"#;
        let result: std::result::Result<Story, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_story_deserialize_bad_url_fails() {
        let json = r#"{"id": 1, "title": "T", "url": "invalid-url"}"#;
        let result: std::result::Result<Story, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_story_deserialize_defaults_type_tag() {
        let json = r#"{"id": 1, "title": "Untyped"}"#;
        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.kind(), "story");
    }

    #[test]
    fn test_story_serialize_skips_absent_url() {
        let story = Story::new(1, "No link", None, "user", 0, 0, 0).unwrap();
        let json = serde_json::to_string(&story).unwrap();
        assert!(!json.contains("url"));
        assert!(json.contains("\"type\":\"story\""));
    }
}
