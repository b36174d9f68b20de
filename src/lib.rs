pub mod builder;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod normalizer;
pub mod pipelines;
pub mod providers;
pub mod youtube;

use std::time::Duration;

use crate::pipelines::url::validate_url;
use crate::providers::ProviderFactory;
use crate::youtube::YouTubeClient;

// Re-export key types for convenient access
pub use builder::{CompletionBackend, SponsorExtractor, SponsorExtractorBuilder};
pub use config::AppConfig;
pub use error::ExtractError;
pub use export::ExportFormat;
pub use model::{SponsorRecord, VideoDetails};
pub use normalizer::normalize;
pub use pipelines::Extraction;
pub use youtube::extract_video_id;

/// Extract the sponsors of a YouTube video using configuration from
/// `config.toml` and the environment.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let extraction =
///     sponsor_extract::extract_sponsors("https://youtu.be/dQw4w9WgXcQ").await?;
/// println!("{}: {} sponsor(s)", extraction.video.title, extraction.sponsors.len());
/// # Ok(())
/// # }
/// ```
pub async fn extract_sponsors(url: &str) -> Result<Extraction, ExtractError> {
    let config = AppConfig::load()?;
    extract_sponsors_with_config(url, &config).await
}

/// Extract the sponsors of a YouTube video with an explicit configuration.
///
/// The URL is checked before any client is created, so a malformed URL is
/// reported even when credentials are missing. Missing credentials are
/// reported before any network call is made.
pub async fn extract_sponsors_with_config(
    url: &str,
    config: &AppConfig,
) -> Result<Extraction, ExtractError> {
    validate_url(url)?;

    let timeout = Duration::from_secs(config.timeout);
    let youtube = YouTubeClient::new(&config.youtube, timeout)?;
    let completion = ProviderFactory::create(config)?;

    pipelines::url::process(url, &youtube, completion.as_ref()).await
}
