use super::REPORT_HEADING;
use crate::model::SponsorRecord;

const RULE_WIDTH: usize = 30;

/// Plain-text report: a heading, then one `Brand:` / `URL:` block per record
pub fn encode(records: &[SponsorRecord]) -> String {
    let mut output = String::new();
    output.push_str(REPORT_HEADING);
    output.push('\n');
    output.push_str(&"=".repeat(RULE_WIDTH));
    output.push_str("\n\n");

    for record in records {
        output.push_str(&format!("Brand: {}\n", record.brand));
        output.push_str(&format!("URL: {}\n", record.url));
        output.push_str(&"-".repeat(RULE_WIDTH));
        output.push_str("\n\n");
    }

    output
}
