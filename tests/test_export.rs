use sponsor_extract::export::{export_filename, write_export};
use sponsor_extract::{normalize, ExportFormat, SponsorRecord};
use tempfile::TempDir;

fn sample_records() -> Vec<SponsorRecord> {
    vec![
        SponsorRecord::new("NordVPN", "https://nordvpn.com/channel"),
        SponsorRecord::new("Brilliant, Inc.", "https://brilliant.org/channel"),
        SponsorRecord::new("NordVPN", "https://nordvpn.com/channel"),
    ]
}

#[tokio::test]
async fn test_write_every_supported_format() {
    let dir = TempDir::new().unwrap();
    let records = sample_records();

    for format in ExportFormat::all().into_iter().filter(|f| f.is_supported()) {
        let path = write_export(&records, "Tech: What's new?", format, dir.path())
            .await
            .unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            format!("Tech What's new_sponsors.{}", format.extension())
        );
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}

#[tokio::test]
async fn test_json_export_normalizes_back_to_same_records() {
    let dir = TempDir::new().unwrap();
    let records = sample_records();

    let path = write_export(&records, "roundtrip", ExportFormat::Json, dir.path())
        .await
        .unwrap();
    let contents = std::fs::read_to_string(path).unwrap();

    assert_eq!(normalize(&contents), records);
}

#[tokio::test]
async fn test_csv_export_quotes_commas() {
    let dir = TempDir::new().unwrap();

    let path = write_export(&sample_records(), "csv", ExportFormat::Csv, dir.path())
        .await
        .unwrap();
    let contents = std::fs::read_to_string(path).unwrap();

    assert_eq!(
        contents,
        "Brand,URL\n\
         NordVPN,https://nordvpn.com/channel\n\
         \"Brilliant, Inc.\",https://brilliant.org/channel\n\
         NordVPN,https://nordvpn.com/channel\n"
    );
}

#[tokio::test]
async fn test_text_export_lists_every_record() {
    let dir = TempDir::new().unwrap();

    let path = write_export(&sample_records(), "text", ExportFormat::Text, dir.path())
        .await
        .unwrap();
    let contents = std::fs::read_to_string(path).unwrap();

    assert!(contents.starts_with("YouTube Sponsor Information\n"));
    assert_eq!(contents.matches("Brand: NordVPN\n").count(), 2);
    assert!(contents.contains("URL: https://brilliant.org/channel\n"));
}

#[tokio::test]
async fn test_export_creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("exports").join("today");

    let path = write_export(&sample_records(), "nested", ExportFormat::Excel, &nested)
        .await
        .unwrap();

    assert!(path.starts_with(&nested));
    let bytes = std::fs::read(path).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[tokio::test]
async fn test_overwrites_existing_export() {
    let dir = TempDir::new().unwrap();
    let title = "same title";

    write_export(&sample_records(), title, ExportFormat::Json, dir.path())
        .await
        .unwrap();
    let path = write_export(&[], title, ExportFormat::Json, dir.path())
        .await
        .unwrap();

    assert_eq!(
        path,
        dir.path().join(export_filename(title, ExportFormat::Json))
    );
    let contents = std::fs::read_to_string(path).unwrap();
    assert!(normalize(&contents).is_empty());
}
