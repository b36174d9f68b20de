//! Reduces a free-form completion reply to a list of [`SponsorRecord`]s.
//!
//! The completion service is asked for a bare JSON array but nothing enforces
//! that, so every stage here fails closed: anything that is not one of the two
//! recognized shapes yields an empty list instead of an error.

use crate::model::SponsorRecord;
use log::debug;
use serde_json::{Map, Value};

/// Values the model uses for "no data" that must never reach the output
const PLACEHOLDER_VALUES: [&str; 3] = ["<NA>", "NA", "N/A"];

const TAGGED_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Parse a raw completion reply into sponsor records.
///
/// Entries keep the order the model gave them in and duplicates are passed
/// through untouched. Never fails: malformed input produces an empty list.
pub fn normalize(raw_reply: &str) -> Vec<SponsorRecord> {
    if raw_reply.trim().is_empty() {
        debug!("Completion reply is empty");
        return Vec::new();
    }

    let body = strip_code_fence(raw_reply);

    let parsed: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            debug!("Completion reply is not valid JSON: {}", e);
            return Vec::new();
        }
    };

    let Some(entries) = candidate_entries(&parsed) else {
        debug!("Completion reply has an unrecognized shape, ignoring it");
        return Vec::new();
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let record = clean_entry(entry);
            if record.is_none() {
                debug!("Dropping sponsor entry {}: {}", index, entry);
            }
            record
        })
        .collect()
}

/// Remove a surrounding markdown code block, tagged `json` or bare.
///
/// Any other wrapping is left alone and will fail to parse.
fn strip_code_fence(raw_reply: &str) -> &str {
    let trimmed = raw_reply.trim();

    let opening = if trimmed.starts_with(TAGGED_FENCE) && trimmed.ends_with(FENCE) {
        TAGGED_FENCE
    } else if trimmed.starts_with(FENCE) && trimmed.ends_with(FENCE) {
        FENCE
    } else {
        return trimmed;
    };

    let inner = &trimmed[opening.len()..];
    inner.strip_suffix(FENCE).unwrap_or(inner).trim()
}

/// Resolve the parsed reply to the array of candidate entries.
///
/// Accepts a top-level array or an object whose `sponsors` key is an array.
fn candidate_entries(parsed: &Value) -> Option<&Vec<Value>> {
    match parsed {
        Value::Array(entries) => Some(entries),
        Value::Object(object) => object.get("sponsors").and_then(Value::as_array),
        _ => None,
    }
}

fn clean_entry(entry: &Value) -> Option<SponsorRecord> {
    let object = entry.as_object()?;

    let brand = usable_field(object, "Brand")?;
    let url = usable_field(object, "URL")?;

    Some(SponsorRecord {
        brand: brand.to_string(),
        url: url.to_string(),
    })
}

/// A field counts only if the key is present (exact case) and its value is a
/// non-empty string that is not a placeholder.
fn usable_field<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    let value = object.get(key)?.as_str()?;
    if value.is_empty() || PLACEHOLDER_VALUES.contains(&value) {
        return None;
    }
    Some(value)
}
