//! Serializers for the normalized sponsor list.
//!
//! Every encoder preserves record order and performs no validation.

#[cfg(feature = "docx")]
mod document;
mod json;
mod spreadsheet;
mod table;
mod text;

use crate::error::ExtractError;
use crate::model::SponsorRecord;
use log::info;
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;

/// Heading used by the text and document exports
pub(crate) const REPORT_HEADING: &str = "YouTube Sponsor Information";

/// Longest title prefix kept in export file names
const MAX_FILENAME_CHARS: usize = 50;

static ILLEGAL_FILENAME_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[\\/*?:"<>|]"#).expect("Failed to compile filename regex")
});

/// Export file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Json,
    Csv,
    Excel,
    Text,
    Docx,
}

impl ExportFormat {
    /// All formats, in the order they are offered
    pub fn all() -> [ExportFormat; 5] {
        [
            ExportFormat::Json,
            ExportFormat::Csv,
            ExportFormat::Excel,
            ExportFormat::Text,
            ExportFormat::Docx,
        ]
    }

    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "xlsx",
            ExportFormat::Text => "txt",
            ExportFormat::Docx => "docx",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Text => "text/plain",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    /// Short human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Csv => "CSV",
            ExportFormat::Excel => "Excel",
            ExportFormat::Text => "TXT",
            ExportFormat::Docx => "DOCX",
        }
    }

    /// Whether this build can produce the format.
    ///
    /// Word documents need the `docx` feature; everything else is always
    /// available.
    pub fn is_supported(&self) -> bool {
        match self {
            ExportFormat::Docx => cfg!(feature = "docx"),
            _ => true,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExportFormat {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" | "excel" => Ok(ExportFormat::Excel),
            "txt" | "text" => Ok(ExportFormat::Text),
            "docx" | "word" => Ok(ExportFormat::Docx),
            other => Err(ExtractError::Export(format!(
                "Unknown export format: {}",
                other
            ))),
        }
    }
}

/// Make a video title safe to use as a file name.
///
/// Drops characters that are illegal on common filesystems, keeps the first
/// 50 characters and trims surrounding whitespace.
pub fn safe_filename(title: &str) -> String {
    let cleaned = ILLEGAL_FILENAME_CHARS.replace_all(title, "");
    cleaned
        .chars()
        .take(MAX_FILENAME_CHARS)
        .collect::<String>()
        .trim()
        .to_string()
}

/// `{safe title}_sponsors.{ext}`
pub fn export_filename(title: &str, format: ExportFormat) -> String {
    format!("{}_sponsors.{}", safe_filename(title), format.extension())
}

/// Serialize the records in the requested format
pub fn encode(records: &[SponsorRecord], format: ExportFormat) -> Result<Vec<u8>, ExtractError> {
    match format {
        ExportFormat::Json => json::encode(records),
        ExportFormat::Csv => table::encode(records),
        ExportFormat::Excel => spreadsheet::encode(records),
        ExportFormat::Text => Ok(text::encode(records).into_bytes()),
        #[cfg(feature = "docx")]
        ExportFormat::Docx => document::encode(records),
        #[cfg(not(feature = "docx"))]
        ExportFormat::Docx => Err(ExtractError::Export(
            "DOCX export requires building with the `docx` feature".to_string(),
        )),
    }
}

/// Encode the records and write them to `{dir}/{safe title}_sponsors.{ext}`,
/// creating the directory if needed. Returns the written path.
pub async fn write_export(
    records: &[SponsorRecord],
    title: &str,
    format: ExportFormat,
    dir: &Path,
) -> Result<PathBuf, ExtractError> {
    let bytes = encode(records, format)?;

    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(export_filename(title, format));
    tokio::fs::write(&path, bytes).await?;

    info!("Wrote {} export to {}", format, path.display());
    Ok(path)
}
