use regex::Regex;
use std::sync::LazyLock;

/// `...v=<id>` or any `/<id>` path segment
static QUERY_OR_PATH_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").expect("Failed to compile video id regex")
});

static SHORT_LINK_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"youtu\.be/([0-9A-Za-z_-]{11})").expect("Failed to compile youtu.be regex")
});

static YOUTUBE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(www\.)?(youtube\.com|youtu\.be)/")
        .expect("Failed to compile YouTube URL regex")
});

/// Extract the 11-character video identifier from a YouTube URL.
///
/// Tries the query-parameter form first, then the youtu.be short link.
/// Existence of the video is not checked.
pub fn extract_video_id(url: &str) -> Option<String> {
    [&*QUERY_OR_PATH_ID, &*SHORT_LINK_ID]
        .iter()
        .find_map(|pattern| pattern.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str().to_string())
}

/// Whether the URL points at youtube.com or youtu.be over http(s)
pub fn is_youtube_url(url: &str) -> bool {
    YOUTUBE_URL.is_match(url)
}
