use crate::config::CompletionConfig;
use crate::error::ExtractError;
use crate::providers::CompletionProvider;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MODEL: &str = "deepseek/deepseek-chat-v3-0324:free";

/// OpenRouter chat completions (OpenAI-compatible wire format)
pub struct OpenRouterProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    referer: String,
    app_title: String,
}

impl OpenRouterProvider {
    /// Create a new OpenRouter provider from configuration
    pub fn new(config: &CompletionConfig, timeout: Duration) -> Result<Self, ExtractError> {
        // Try config first, then fall back to environment variable
        let api_key = config.resolved_api_key().ok_or_else(|| {
            ExtractError::Configuration(
                "OpenRouter API key not found. Set OPENROUTER_API_KEY in the environment or .env file"
                    .to_string(),
            )
        })?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            ExtractError::Completion(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(OpenRouterProvider {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: config
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            referer: config.referer.clone(),
            app_title: config.app_title.clone(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        let defaults = CompletionConfig::default();
        OpenRouterProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: None,
            max_tokens: None,
            referer: defaults.referer,
            app_title: defaults.app_title,
        }
    }

    fn request_body(&self, prompt: &str) -> Value {
        let mut body = json!({
            "model": self.model,
            "messages": [
                {"role": "user", "content": prompt}
            ],
            "response_format": {"type": "json_object"}
        });
        if let Some(temperature) = self.temperature {
            body["temperature"] = json!(temperature);
        }
        if let Some(max_tokens) = self.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }
        body
    }
}

#[async_trait]
impl CompletionProvider for OpenRouterProvider {
    fn provider_name(&self) -> &str {
        "openrouter"
    }

    async fn complete(&self, prompt: &str) -> Result<String, ExtractError> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.app_title)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| ExtractError::Completion(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ExtractError::Completion(format!(
                "OpenRouter request failed with status {}: {}",
                status, body
            )));
        }

        let response_body: Value = response
            .json()
            .await
            .map_err(|e| ExtractError::Completion(e.to_string()))?;
        debug!("{:?}", response_body);

        let message = response_body
            .pointer("/choices/0/message")
            .ok_or_else(|| {
                ExtractError::Completion("Failed to extract message from response".to_string())
            })?;

        // A null content is an empty reply, which normalizes to no sponsors
        Ok(message["content"].as_str().unwrap_or_default().to_string())
    }
}
