//! Upstream Client Module
//!
//! Thin reqwest wrapper over the Hacker News Firebase API. The upstream
//! exposes exactly two things this service needs: the ordered list of newest
//! story ids, and a per-id item fetch.
//!
//! The client performs no caching and no retries. Every failure mode —
//! non-2xx status, transport error, timeout, undecodable payload — degrades
//! to "nothing there" so that callers render fewer results instead of errors.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::models::Story;

// == Hacker News Client ==
#[derive(Debug, Clone)]
pub struct HnClient {
    client: Client,
    base_url: String,
}

impl HnClient {
    // == Constructor ==
    /// Creates a client for the given API base URL (no trailing slash),
    /// applying `timeout` to every request.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    // == Fetch Id List ==
    /// Fetches the ordered list of newest story ids.
    ///
    /// Returns an empty list on any failure; an upstream outage shows up to
    /// callers as "no new stories", never as an error.
    pub async fn fetch_new_story_ids(&self) -> Vec<u64> {
        let url = format!("{}/newstories.json", self.base_url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "failed to reach upstream for story id list");
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            warn!(status = %response.status(), "upstream returned non-success for story id list");
            return Vec::new();
        }

        match response.json::<Vec<u64>>().await {
            Ok(ids) => {
                debug!(count = ids.len(), "fetched story id list");
                ids
            }
            Err(err) => {
                warn!(error = %err, "failed to decode story id list");
                Vec::new()
            }
        }
    }

    // == Fetch Item ==
    /// Fetches a single story by id.
    ///
    /// Returns `None` for not-found, transport failure, timeout, a `null`
    /// body (how the upstream reports unknown ids), or a payload that fails
    /// story validation. Not-found and unreachable are deliberately
    /// indistinguishable to callers.
    pub async fn fetch_story(&self, id: u64) -> Option<Story> {
        let url = format!("{}/item/{}.json", self.base_url, id);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(id, error = %err, "failed to reach upstream for story");
                return None;
            }
        };

        if !response.status().is_success() {
            debug!(id, status = %response.status(), "upstream returned non-success for story");
            return None;
        }

        match response.json::<Option<Story>>().await {
            Ok(Some(story)) => Some(story),
            Ok(None) => {
                debug!(id, "upstream has no item for id");
                None
            }
            Err(err) => {
                warn!(id, error = %err, "failed to decode story payload");
                None
            }
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> HnClient {
        HnClient::new(server.uri(), Duration::from_secs(2))
    }

    #[tokio::test]
    async fn test_fetch_ids_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/newstories.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(vec![3u64, 2, 1]))
            .mount(&server)
            .await;

        let ids = test_client(&server).fetch_new_story_ids().await;
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_fetch_ids_non_success_yields_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/newstories.json"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let ids = test_client(&server).fetch_new_story_ids().await;
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_ids_unreachable_yields_empty() {
        // Nothing is listening on this port.
        let client = HnClient::new("http://127.0.0.1:1", Duration::from_millis(500));
        let ids = client.fetch_new_story_ids().await;
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_story_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/item/42.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 42,
                "title": "A story",
                "by": "someone",
                "score": 10,
                "time": 1_700_000_000,
                "descendants": 3,
                "type": "story"
            })))
            .mount(&server)
            .await;

        let story = test_client(&server).fetch_story(42).await.unwrap();
        assert_eq!(story.id(), 42);
        assert_eq!(story.title(), "A story");
    }

    #[tokio::test]
    async fn test_fetch_story_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/item/999.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        assert!(test_client(&server).fetch_story(999).await.is_none());
    }

    #[tokio::test]
    async fn test_fetch_story_null_body() {
        // The upstream answers 200 with a literal null for unknown ids.
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/item/7.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        assert!(test_client(&server).fetch_story(7).await.is_none());
    }

    #[tokio::test]
    async fn test_fetch_story_invalid_payload_treated_as_absent() {
        // Empty title fails story validation; the client reports it absent.
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/item/8.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 8,
                "title": ""
            })))
            .mount(&server)
            .await;

        assert!(test_client(&server).fetch_story(8).await.is_none());
    }
}
