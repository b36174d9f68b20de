use crate::config::AppConfig;
use crate::error::ExtractError;
use crate::providers::{CompletionProvider, OllamaProvider, OpenRouterProvider};
use std::time::Duration;

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create the completion provider named in the configuration
    pub fn create(config: &AppConfig) -> Result<Box<dyn CompletionProvider>, ExtractError> {
        let timeout = Duration::from_secs(config.timeout);
        let completion = &config.completion;

        match completion.provider.as_str() {
            "openrouter" => Ok(Box::new(OpenRouterProvider::new(completion, timeout)?)),
            "ollama" => Ok(Box::new(OllamaProvider::new(completion, timeout)?)),
            other => Err(ExtractError::Configuration(format!(
                "Unknown completion provider: {} (available: {})",
                other,
                Self::available_providers().join(", ")
            ))),
        }
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["openrouter", "ollama"]
    }
}
