use crate::error::ExtractError;
use crate::model::SponsorRecord;
use crate::normalizer::normalize;
use crate::providers::{build_prompt, CompletionProvider};
use log::{debug, info};

/// Ask the completion service for the sponsors mentioned in a description.
///
/// Only a failed completion call is an error. Whatever the service replies
/// is normalized, so an unusable reply comes back as an empty list.
pub async fn process(
    description: &str,
    provider: &dyn CompletionProvider,
) -> Result<Vec<SponsorRecord>, ExtractError> {
    let prompt = build_prompt(description);

    info!(
        "Extracting sponsor information with {}",
        provider.provider_name()
    );
    let reply = provider.complete(&prompt).await?;
    debug!("Raw completion reply: {}", reply);

    let sponsors = normalize(&reply);
    info!("Found {} sponsor(s)", sponsors.len());
    Ok(sponsors)
}
