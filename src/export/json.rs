use crate::error::ExtractError;
use crate::model::SponsorRecord;

/// Pretty-printed array of `{"Brand", "URL"}` objects
pub fn encode(records: &[SponsorRecord]) -> Result<Vec<u8>, ExtractError> {
    serde_json::to_vec_pretty(records).map_err(|e| ExtractError::Export(e.to_string()))
}
