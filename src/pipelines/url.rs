use super::{text, Extraction};
use crate::error::ExtractError;
use crate::providers::CompletionProvider;
use crate::youtube::{is_youtube_url, MetadataProvider};
use log::info;

/// Reject input that is not a YouTube URL before any network call is made
pub fn validate_url(url: &str) -> Result<(), ExtractError> {
    if url.trim().is_empty() {
        return Err(ExtractError::InvalidInput(
            "Please enter a YouTube URL.".to_string(),
        ));
    }
    if !is_youtube_url(url.trim()) {
        return Err(ExtractError::InvalidInput(
            "Please enter a valid YouTube URL.".to_string(),
        ));
    }
    Ok(())
}

/// Extract the sponsors of the video behind a YouTube URL
///
/// This pipeline:
/// 1. Validates the URL shape
/// 2. Fetches title and description from the metadata provider
/// 3. Sends the description to the completion provider
/// 4. Normalizes the reply into sponsor records
///
/// # Returns
/// * `Ok(Extraction)` - The video and its sponsors (possibly none)
/// * `Err(...)` - If the URL is invalid or either service call fails
pub async fn process(
    url: &str,
    metadata: &dyn MetadataProvider,
    completion: &dyn CompletionProvider,
) -> Result<Extraction, ExtractError> {
    validate_url(url)?;
    let url = url.trim();

    info!("Fetching video information from {}", metadata.provider_name());
    let video = metadata.fetch(url).await?.ok_or_else(|| {
        ExtractError::Provider(
            "Could not fetch video information. Check the URL or API key.".to_string(),
        )
    })?;

    let sponsors = text::process(&video.description, completion).await?;

    Ok(Extraction { video, sponsors })
}
