use std::time::Duration;

use crate::{config::AppConfig, extract_sponsors_with_config, Extraction, ExtractError};

/// Completion service to send the description to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionBackend {
    OpenRouter,
    Ollama,
}

impl CompletionBackend {
    /// Convert to provider name string used by the factory
    fn as_str(&self) -> &str {
        match self {
            CompletionBackend::OpenRouter => "openrouter",
            CompletionBackend::Ollama => "ollama",
        }
    }
}

/// Builder for configuring and running a sponsor extraction
#[derive(Debug, Default)]
pub struct SponsorExtractorBuilder {
    url: Option<String>,
    config: Option<AppConfig>,
    backend: Option<CompletionBackend>,
    youtube_api_key: Option<String>,
    completion_api_key: Option<String>,
    model: Option<String>,
    timeout: Option<Duration>,
}

impl SponsorExtractorBuilder {
    /// Set the YouTube video URL
    ///
    /// # Example
    /// ```
    /// use sponsor_extract::SponsorExtractor;
    ///
    /// let builder = SponsorExtractor::builder()
    ///     .url("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    /// ```
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Use this configuration instead of loading `config.toml` and the environment
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Choose the completion service
    ///
    /// # Example
    /// ```
    /// use sponsor_extract::{CompletionBackend, SponsorExtractor};
    ///
    /// let builder = SponsorExtractor::builder()
    ///     .url("https://youtu.be/dQw4w9WgXcQ")
    ///     .backend(CompletionBackend::Ollama)
    ///     .model("llama3.1");
    /// ```
    pub fn backend(mut self, backend: CompletionBackend) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Set the YouTube Data API key directly
    pub fn youtube_api_key(mut self, key: impl Into<String>) -> Self {
        self.youtube_api_key = Some(key.into());
        self
    }

    /// Set the completion service API key directly
    pub fn completion_api_key(mut self, key: impl Into<String>) -> Self {
        self.completion_api_key = Some(key.into());
        self
    }

    /// Set the model name for the completion service
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set a timeout for HTTP requests (whole seconds)
    ///
    /// # Example
    /// ```
    /// use sponsor_extract::SponsorExtractor;
    /// use std::time::Duration;
    ///
    /// let builder = SponsorExtractor::builder()
    ///     .url("https://youtu.be/dQw4w9WgXcQ")
    ///     .timeout(Duration::from_secs(60));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    fn resolve_config(&mut self) -> Result<AppConfig, ExtractError> {
        let mut config = match self.config.take() {
            Some(config) => config,
            None => AppConfig::load()?,
        };

        if let Some(backend) = self.backend {
            config.completion.provider = backend.as_str().to_string();
        }
        if let Some(key) = self.youtube_api_key.take() {
            config.youtube.api_key = Some(key);
        }
        if let Some(key) = self.completion_api_key.take() {
            config.completion.api_key = Some(key);
        }
        if let Some(model) = self.model.take() {
            config.completion.model = Some(model);
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout.as_secs().max(1);
        }

        Ok(config)
    }

    /// Run the extraction
    ///
    /// # Errors
    /// Returns `ExtractError` if:
    /// - No URL was specified
    /// - The URL is not a YouTube video URL
    /// - A required API key is missing
    /// - The metadata or completion service call fails
    ///
    /// # Example
    /// ```no_run
    /// # use sponsor_extract::SponsorExtractor;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let extraction = SponsorExtractor::builder()
    ///     .url("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
    ///     .build()
    ///     .await?;
    /// for sponsor in extraction.sponsors {
    ///     println!("{}: {}", sponsor.brand, sponsor.url);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(mut self) -> Result<Extraction, ExtractError> {
        let url = self.url.take().ok_or_else(|| {
            ExtractError::Builder("No video URL specified. Use .url()".to_string())
        })?;
        let config = self.resolve_config()?;

        extract_sponsors_with_config(&url, &config).await
    }
}

/// Main entry point for the builder API
pub struct SponsorExtractor;

impl SponsorExtractor {
    /// Creates a new builder for extracting sponsors
    ///
    /// # Example
    /// ```
    /// use sponsor_extract::SponsorExtractor;
    ///
    /// let builder = SponsorExtractor::builder();
    /// ```
    pub fn builder() -> SponsorExtractorBuilder {
        SponsorExtractorBuilder::default()
    }
}
