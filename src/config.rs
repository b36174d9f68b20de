use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Environment variable consulted when no YouTube key is configured
pub const YOUTUBE_API_KEY_VAR: &str = "YOUTUBE_API_KEY";
/// Environment variable consulted when no completion key is configured
pub const OPENROUTER_API_KEY_VAR: &str = "OPENROUTER_API_KEY";

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Video metadata provider settings
    #[serde(default)]
    pub youtube: YoutubeConfig,
    /// Completion service settings
    #[serde(default)]
    pub completion: CompletionConfig,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

/// Configuration for the YouTube Data API
#[derive(Debug, Deserialize, Clone)]
pub struct YoutubeConfig {
    /// API key (falls back to YOUTUBE_API_KEY)
    pub api_key: Option<String>,
    /// Base URL of the Data API
    #[serde(default = "default_youtube_base_url")]
    pub base_url: String,
}

/// Configuration for the language-model completion service
#[derive(Debug, Deserialize, Clone)]
pub struct CompletionConfig {
    /// Provider name ("openrouter" or "ollama")
    #[serde(default = "default_provider")]
    pub provider: String,
    /// API key (falls back to OPENROUTER_API_KEY)
    pub api_key: Option<String>,
    /// Base URL for API endpoint; each provider has its own default
    pub base_url: Option<String>,
    /// Model identifier; each provider has its own default
    pub model: Option<String>,
    /// Temperature for generation, provider default when unset
    pub temperature: Option<f32>,
    /// Maximum tokens to generate, provider default when unset
    pub max_tokens: Option<u32>,
    /// Value of the HTTP-Referer header sent to OpenRouter
    #[serde(default = "default_referer")]
    pub referer: String,
    /// Value of the X-Title header sent to OpenRouter
    #[serde(default = "default_app_title")]
    pub app_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            youtube: YoutubeConfig::default(),
            completion: CompletionConfig::default(),
            timeout: default_timeout(),
        }
    }
}

impl Default for YoutubeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_youtube_base_url(),
        }
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key: None,
            base_url: None,
            model: None,
            temperature: None,
            max_tokens: None,
            referer: default_referer(),
            app_title: default_app_title(),
        }
    }
}

// Default value functions
fn default_timeout() -> u64 {
    30
}

fn default_youtube_base_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

fn default_provider() -> String {
    "openrouter".to_string()
}

fn default_referer() -> String {
    "http://localhost:8501".to_string()
}

fn default_app_title() -> String {
    "YouTube Sponsor Extractor".to_string()
}

/// Configured value if non-empty, otherwise the named environment variable
fn key_or_env(configured: &Option<String>, var: &str) -> Option<String> {
    let usable = |key: &String| !key.trim().is_empty();
    configured
        .clone()
        .filter(usable)
        .or_else(|| std::env::var(var).ok().filter(usable))
}

impl YoutubeConfig {
    /// Resolve the API key from configuration or the environment
    pub fn resolved_api_key(&self) -> Option<String> {
        key_or_env(&self.api_key, YOUTUBE_API_KEY_VAR)
    }
}

impl CompletionConfig {
    /// Resolve the API key from configuration or the environment
    pub fn resolved_api_key(&self) -> Option<String> {
        key_or_env(&self.api_key, OPENROUTER_API_KEY_VAR)
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with SPONSOR__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: SPONSOR__COMPLETION__MODEL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// Credentials are not validated here. A missing key only becomes an error
/// when the component that needs it is constructed.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: SPONSOR__YOUTUBE__API_KEY
        .add_source(
            Environment::with_prefix("SPONSOR")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
