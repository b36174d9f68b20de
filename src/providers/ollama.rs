use crate::config::CompletionConfig;
use crate::error::ExtractError;
use crate::providers::CompletionProvider;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:11434";
const DEFAULT_MODEL: &str = "llama3.1";

/// Locally hosted model served by Ollama. Needs no credential.
pub struct OllamaProvider {
    client: Client,
    base_url: String,
    model: String,
    temperature: Option<f32>,
}

impl OllamaProvider {
    /// Create a new Ollama provider from configuration
    pub fn new(config: &CompletionConfig, timeout: Duration) -> Result<Self, ExtractError> {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            ExtractError::Completion(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(OllamaProvider {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: config
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: config.temperature,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: String, model: String) -> Self {
        OllamaProvider {
            client: Client::new(),
            base_url,
            model,
            temperature: None,
        }
    }
}

#[async_trait]
impl CompletionProvider for OllamaProvider {
    fn provider_name(&self) -> &str {
        "ollama"
    }

    async fn complete(&self, prompt: &str) -> Result<String, ExtractError> {
        let mut body = json!({
            "model": self.model,
            "messages": [
                {"role": "user", "content": prompt}
            ],
            "format": "json",
            "stream": false
        });
        if let Some(temperature) = self.temperature {
            body["options"] = json!({ "temperature": temperature });
        }

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| ExtractError::Completion(e.to_string()))?;

        // Check status code before attempting to parse JSON
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("error").map(|e| e.to_string()))
                .unwrap_or(body);
            return Err(ExtractError::Completion(format!(
                "Ollama request failed with status {}: {}",
                status, detail
            )));
        }

        let response_body: Value = response
            .json()
            .await
            .map_err(|e| ExtractError::Completion(e.to_string()))?;
        debug!("Ollama response: {:?}", response_body);

        if let Some(error) = response_body.get("error") {
            return Err(ExtractError::Completion(format!("Ollama error: {}", error)));
        }

        response_body["message"]["content"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| {
                ExtractError::Completion("Failed to extract content from response".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_complete() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/chat")
            .match_body(Matcher::PartialJson(json!({
                "model": "llama3.1",
                "format": "json",
                "stream": false
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "model": "llama3.1",
                    "message": {
                        "role": "assistant",
                        "content": "{\"sponsors\": [{\"Brand\": \"Brilliant\", \"URL\": \"https://brilliant.org/x\"}]}"
                    },
                    "done": true
                }"#,
            )
            .create_async()
            .await;

        let provider = OllamaProvider::with_base_url(server.url(), "llama3.1".to_string());
        let result = provider.complete("find sponsors").await.unwrap();

        assert!(result.contains("Brilliant"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_complete_model_not_found() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/chat")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "model \"missing\" not found"}"#)
            .create_async()
            .await;

        let provider = OllamaProvider::with_base_url(server.url(), "missing".to_string());
        let result = provider.complete("prompt").await;

        match result {
            Err(ExtractError::Completion(message)) => assert!(message.contains("not found")),
            other => panic!("Expected completion error, got {:?}", other),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_complete_non_json_error_keeps_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/chat")
            .with_status(502)
            .with_header("content-type", "text/html")
            .with_body("<html><body>Bad Gateway</body></html>")
            .create_async()
            .await;

        let provider = OllamaProvider::with_base_url(server.url(), "llama3.1".to_string());
        let result = provider.complete("prompt").await;

        match result {
            Err(ExtractError::Completion(message)) => {
                assert!(message.contains("502"));
                assert!(message.contains("Bad Gateway"));
            }
            other => panic!("Expected completion error, got {:?}", other),
        }
        mock.assert_async().await;
    }

    #[test]
    fn test_new_uses_ollama_default_model() {
        let config = CompletionConfig {
            provider: "ollama".to_string(),
            ..Default::default()
        };
        let provider = OllamaProvider::new(&config, Duration::from_secs(5)).unwrap();
        assert_eq!(provider.model, DEFAULT_MODEL);

        let config = CompletionConfig {
            model: Some("mistral".to_string()),
            ..config
        };
        let provider = OllamaProvider::new(&config, Duration::from_secs(5)).unwrap();
        assert_eq!(provider.model, "mistral");
    }

    #[test]
    fn test_new_needs_no_api_key() {
        let config = CompletionConfig {
            provider: "ollama".to_string(),
            ..Default::default()
        };
        let provider = OllamaProvider::new(&config, Duration::from_secs(5)).unwrap();
        assert_eq!(provider.provider_name(), "ollama");
        assert_eq!(provider.base_url, DEFAULT_BASE_URL);
    }
}
