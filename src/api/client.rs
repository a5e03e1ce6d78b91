//! Coub API HTTP client.

use reqwest::{Client, Response};

use crate::api::types::TimelineResponse;
use crate::error::{Error, Result};

/// Coub API base URL.
pub const API_BASE: &str = "https://coub.com";

/// Path of the liked-coubs timeline.
const LIKES_PATH: &str = "/api/v2/timeline/likes";

/// Maximum number of coubs the API returns per page.
pub const PAGE_SIZE: u32 = 50;

/// Coub API client bound to one access token.
pub struct CoubApi {
    client: Client,
    base_url: String,
    token: String,
}

impl CoubApi {
    /// Create a client talking to the public Coub API.
    pub fn new(token: String) -> Result<Self> {
        Self::with_base_url(API_BASE, token)
    }

    /// Create a client talking to an arbitrary base URL.
    pub fn with_base_url(base_url: &str, token: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("coub-downloader/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Fetch one page of the liked timeline.
    pub async fn get_likes(&self, page: u32, per_page: u32) -> Result<TimelineResponse> {
        let url = format!("{}{}", self.base_url, LIKES_PATH);
        tracing::debug!("GET {} (page {}, per_page {})", url, page, per_page);

        let per_page = per_page.to_string();
        let page = page.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("access_token", self.token.as_str()),
                ("per_page", per_page.as_str()),
                ("page", page.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        let text = response.text().await?;
        if !status.is_success() {
            let hint = if status == 401 || status == 403 {
                " (the stored token may be expired, try --reauth)"
            } else {
                ""
            };
            return Err(Error::Api(format!(
                "HTTP {}{}: {}",
                status,
                hint,
                snippet(&text, 200)
            )));
        }

        serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse timeline: {} - Response: {}",
                e,
                snippet(&text, 500)
            ))
        })
    }

    /// Request a media file. Non-success statuses are reported as errors.
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::AssetFetch {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(Error::AssetFetch {
                url: url.to_string(),
                message: format!("bad status: HTTP {}", response.status()),
            });
        }

        Ok(response)
    }
}

/// First `max` characters of a response body, for error messages.
fn snippet(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_likes_sends_token_and_paging() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v2/timeline/likes")
                    .query_param("access_token", "tok")
                    .query_param("per_page", "50")
                    .query_param("page", "3");
                then.status(200).json_body(json!({
                    "page": 3,
                    "total_pages": 7,
                    "per_page": 50,
                    "coubs": []
                }));
            })
            .await;

        let api = CoubApi::with_base_url(&server.base_url(), "tok".into()).unwrap();
        let timeline = api.get_likes(3, 50).await.unwrap();

        mock.assert_async().await;
        assert_eq!(timeline.total_pages, 7);
        assert!(timeline.coubs.is_empty());
    }

    #[tokio::test]
    async fn test_get_likes_unauthorized_mentions_reauth() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v2/timeline/likes");
                then.status(401).body("{\"error\":\"unauthorized\"}");
            })
            .await;

        let api = CoubApi::with_base_url(&server.base_url(), "stale".into()).unwrap();
        let err = api.get_likes(1, 1).await.unwrap_err();
        assert!(err.to_string().contains("--reauth"));
    }

    #[tokio::test]
    async fn test_download_file_bad_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/missing.mp4");
                then.status(404);
            })
            .await;

        let api = CoubApi::with_base_url(&server.base_url(), "tok".into()).unwrap();
        let url = server.url("/missing.mp4");
        match api.download_file(&url).await {
            Err(Error::AssetFetch { url: failed, message }) => {
                assert_eq!(failed, url);
                assert!(message.contains("404"));
            }
            other => panic!("expected AssetFetch, got {:?}", other.map(|_| ())),
        }
    }
}
