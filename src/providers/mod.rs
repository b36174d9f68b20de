mod factory;
mod ollama;
mod open_router;
mod prompt;

pub use factory::ProviderFactory;
pub use ollama::OllamaProvider;
pub use open_router::OpenRouterProvider;
pub use prompt::{build_prompt, SPONSOR_EXTRACTION_PROMPT};

use crate::error::ExtractError;
use async_trait::async_trait;

/// Unified trait for language-model completion services
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Get the provider name (e.g., "openrouter", "ollama")
    fn provider_name(&self) -> &str;

    /// Send a prompt and return the raw text of the reply.
    ///
    /// Providers ask the service for JSON output but do not validate it.
    async fn complete(&self, prompt: &str) -> Result<String, ExtractError>;
}
