pub mod text;
pub mod url;

use crate::model::{SponsorRecord, VideoDetails};

/// Outcome of one extraction request
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// The video the sponsors were read from
    pub video: VideoDetails,
    /// Sponsors in the order the model listed them; may be empty
    pub sponsors: Vec<SponsorRecord>,
}

impl Extraction {
    pub fn has_sponsors(&self) -> bool {
        !self.sponsors.is_empty()
    }
}
