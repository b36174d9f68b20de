use crate::error::ExtractError;
use crate::model::SponsorRecord;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

/// Single-sheet workbook with a bold `Brand | URL` header row
pub fn encode(records: &[SponsorRecord]) -> Result<Vec<u8>, ExtractError> {
    build_workbook(records).map_err(|e| ExtractError::Export(e.to_string()))
}

fn build_workbook(records: &[SponsorRecord]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    {
        let worksheet = workbook.add_worksheet();
        worksheet.write_string_with_format(0, 0, "Brand", &header)?;
        worksheet.write_string_with_format(0, 1, "URL", &header)?;

        for (row, record) in (1u32..).zip(records) {
            worksheet.write_string(row, 0, &record.brand)?;
            worksheet.write_string(row, 1, &record.url)?;
        }

        worksheet.set_column_width(0, 30)?;
        worksheet.set_column_width(1, 60)?;
    }

    workbook.save_to_buffer()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_produces_zip_container() {
        let records = vec![SponsorRecord::new("Skillshare", "https://skl.sh/abc")];
        let bytes = encode(&records).unwrap();

        // xlsx files are zip archives
        assert!(bytes.starts_with(b"PK"));
    }

    fn archive_entry(bytes: &[u8], name: &str) -> String {
        use std::io::Read;

        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        let mut contents = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        contents
    }

    #[test]
    fn test_encode_header_then_rows_in_order() {
        let records = vec![
            SponsorRecord::new("Zeta", "https://zeta.example/z"),
            SponsorRecord::new("Alpha", "https://alpha.example/a"),
        ];
        let bytes = encode(&records).unwrap();

        let strings = archive_entry(&bytes, "xl/sharedStrings.xml");
        let position = |text: &str| {
            strings
                .find(&format!(">{}<", text))
                .unwrap_or_else(|| panic!("{} missing from shared strings", text))
        };
        assert!(position("Brand") < position("URL"));
        assert!(position("URL") < position("Zeta"));
        assert!(position("Zeta") < position("https://zeta.example/z"));
        assert!(position("https://zeta.example/z") < position("Alpha"));
        assert!(position("Alpha") < position("https://alpha.example/a"));

        // Header row plus one row per record
        let sheet = archive_entry(&bytes, "xl/worksheets/sheet1.xml");
        assert!(sheet.contains(r#"r="A1""#));
        assert!(sheet.contains(r#"r="B3""#));
        assert!(!sheet.contains(r#"r="A4""#));
    }

    #[test]
    fn test_encode_empty() {
        let bytes = encode(&[]).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
