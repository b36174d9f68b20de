use crate::error::ExtractError;
use crate::model::SponsorRecord;

/// CSV with a `Brand,URL` header row
pub fn encode(records: &[SponsorRecord]) -> Result<Vec<u8>, ExtractError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    // Written explicitly so an empty list still gets a header
    writer
        .write_record(["Brand", "URL"])
        .map_err(|e| ExtractError::Export(e.to_string()))?;
    for record in records {
        writer
            .write_record([record.brand.as_str(), record.url.as_str()])
            .map_err(|e| ExtractError::Export(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| ExtractError::Export(e.to_string()))
}
