use super::REPORT_HEADING;
use crate::error::ExtractError;
use crate::model::SponsorRecord;
use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};
use std::io::Cursor;

/// Word document with a heading and a two-column `Brand | URL` table
pub fn encode(records: &[SponsorRecord]) -> Result<Vec<u8>, ExtractError> {
    let mut rows = vec![TableRow::new(vec![
        header_cell("Brand"),
        header_cell("URL"),
    ])];
    rows.extend(
        records
            .iter()
            .map(|record| TableRow::new(vec![text_cell(&record.brand), text_cell(&record.url)])),
    );

    let docx = Docx::new()
        .add_paragraph(
            Paragraph::new().add_run(Run::new().add_text(REPORT_HEADING).size(40).bold()),
        )
        .add_table(Table::new(rows));

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| ExtractError::Export(e.to_string()))?;

    Ok(buffer.into_inner())
}

fn header_cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text).bold()))
}

fn text_cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
}
