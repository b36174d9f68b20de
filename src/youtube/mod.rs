mod client;
mod video_id;

pub use client::YouTubeClient;
pub use video_id::{extract_video_id, is_youtube_url};

use crate::error::ExtractError;
use crate::model::VideoDetails;
use async_trait::async_trait;

/// Source of video titles and descriptions
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Get the provider name (e.g., "youtube")
    fn provider_name(&self) -> &str;

    /// Look up a video by identifier.
    ///
    /// `Ok(None)` means the provider answered but knows no such video.
    async fn fetch_video(&self, video_id: &str) -> Result<Option<VideoDetails>, ExtractError>;

    /// Resolve the identifier from a URL, then look the video up
    async fn fetch(&self, url: &str) -> Result<Option<VideoDetails>, ExtractError> {
        let video_id = extract_video_id(url)
            .ok_or_else(|| ExtractError::InvalidInput("Invalid YouTube URL".to_string()))?;
        self.fetch_video(&video_id).await
    }
}
