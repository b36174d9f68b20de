use super::MetadataProvider;
use crate::config::YoutubeConfig;
use crate::error::ExtractError;
use crate::model::VideoDetails;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

#[derive(Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Deserialize)]
struct VideoItem {
    snippet: Snippet,
}

#[derive(Deserialize)]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
}

/// Client for the YouTube Data API v3 `videos` endpoint
pub struct YouTubeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    /// Create a client from configuration.
    ///
    /// Fails with [`ExtractError::Configuration`] when no API key is set in
    /// the config or the YOUTUBE_API_KEY environment variable.
    pub fn new(config: &YoutubeConfig, timeout: Duration) -> Result<Self, ExtractError> {
        let api_key = config.resolved_api_key().ok_or_else(|| {
            ExtractError::Configuration(
                "YouTube API key not found. Set YOUTUBE_API_KEY in the environment or .env file"
                    .to_string(),
            )
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ExtractError::Provider(format!("Failed to create HTTP client: {}", e)))?;

        Ok(YouTubeClient {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        YouTubeClient {
            client: Client::new(),
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl MetadataProvider for YouTubeClient {
    fn provider_name(&self) -> &str {
        "youtube"
    }

    async fn fetch_video(&self, video_id: &str) -> Result<Option<VideoDetails>, ExtractError> {
        debug!("Fetching snippet for video {}", video_id);

        let response = self
            .client
            .get(format!("{}/videos", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("id", video_id),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ExtractError::Provider(format!("YouTube API error: {}", e)))?;

        // Check status code before attempting to parse JSON
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ExtractError::Provider(format!(
                "YouTube API error: request failed with status {}: {}",
                status, body
            )));
        }

        let body: VideoListResponse = response.json().await.map_err(|e| {
            ExtractError::Provider(format!("YouTube API error: failed to parse response: {}", e))
        })?;

        Ok(body.items.into_iter().next().map(|item| VideoDetails {
            title: item.snippet.title,
            description: item.snippet.description,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_fetch_video() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/videos")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("part".into(), "snippet".into()),
                Matcher::UrlEncoded("id".into(), "dQw4w9WgXcQ".into()),
                Matcher::UrlEncoded("key".into(), "yt_key".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "items": [{
                        "snippet": {
                            "title": "Building a desk",
                            "description": "Thanks to Squarespace for sponsoring: https://squarespace.com/desk"
                        }
                    }]
                }"#,
            )
            .create_async()
            .await;

        let client = YouTubeClient::with_base_url("yt_key".to_string(), server.url());
        let details = client.fetch_video("dQw4w9WgXcQ").await.unwrap().unwrap();

        assert_eq!(details.title, "Building a desk");
        assert!(details.description.contains("squarespace.com/desk"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_video_not_found() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/videos")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"kind": "youtube#videoListResponse", "items": []}"#)
            .create_async()
            .await;

        let client = YouTubeClient::with_base_url("yt_key".to_string(), server.url());
        let details = client.fetch_video("aaaaaaaaaaa").await.unwrap();

        assert!(details.is_none());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_video_api_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/videos")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_body(r#"{"error": {"message": "API key not valid"}}"#)
            .create_async()
            .await;

        let client = YouTubeClient::with_base_url("bad_key".to_string(), server.url());
        let result = client.fetch_video("dQw4w9WgXcQ").await;

        match result {
            Err(ExtractError::Provider(message)) => assert!(message.contains("403")),
            other => panic!("Expected provider error, got {:?}", other),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_rejects_url_without_id() {
        let client =
            YouTubeClient::with_base_url("yt_key".to_string(), "http://127.0.0.1:9".to_string());
        let result = client.fetch("https://www.youtube.com/").await;

        assert!(matches!(result, Err(ExtractError::InvalidInput(_))));
    }

    #[test]
    fn test_new_requires_api_key() {
        let config = YoutubeConfig {
            api_key: Some(String::new()),
            ..Default::default()
        };
        // An explicitly blank key falls through to the environment
        if std::env::var(crate::config::YOUTUBE_API_KEY_VAR).is_err() {
            let result = YouTubeClient::new(&config, Duration::from_secs(5));
            assert!(matches!(result, Err(ExtractError::Configuration(_))));
        }
    }
}
