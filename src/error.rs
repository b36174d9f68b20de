use thiserror::Error;

/// Errors that can occur while extracting sponsors from a video
#[derive(Error, Debug)]
pub enum ExtractError {
    /// A required credential is missing
    #[error("{0}")]
    Configuration(String),

    /// The supplied URL is not a recognizable YouTube video URL
    #[error("{0}")]
    InvalidInput(String),

    /// The video metadata provider failed or found nothing
    #[error("{0}")]
    Provider(String),

    /// The completion service failed to produce a reply
    #[error("Completion service error: {0}")]
    Completion(String),

    /// Encoding an export payload failed
    #[error("Export failed: {0}")]
    Export(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// Writing an export to disk failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration sources could not be read
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ExtractError {
    /// Message suitable for showing to a person running the tool
    pub fn user_message(&self) -> String {
        format!("An error occurred: {}", self)
    }
}
