use serde::{Deserialize, Serialize};

/// A sponsored brand and the link promoted for it.
///
/// Serializes with the `Brand` / `URL` keys the completion service is asked
/// to produce, so exported JSON can be fed back through the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SponsorRecord {
    #[serde(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "URL")]
    pub url: String,
}

impl SponsorRecord {
    pub fn new(brand: impl Into<String>, url: impl Into<String>) -> Self {
        SponsorRecord {
            brand: brand.into(),
            url: url.into(),
        }
    }
}

/// Title and description of a single video
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoDetails {
    pub title: String,
    pub description: String,
}
