use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;

/// A parsed delimited table: one header row plus data rows padded to the
/// header's width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Strips a UTF-8 BOM and collapses whitespace runs in a header cell.
fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Reads `path` as a delimited table.
///
/// The first record is the header row. Data rows are padded with empty
/// fields up to the header's width and fields beyond it are dropped, so a
/// mapped column index is always addressable. Cell values are preserved
/// verbatim; only headers are normalized.
///
/// # Errors
///
/// Fails when the file cannot be opened or parsed, or when it contains no
/// header row at all.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let mut records = reader.records();
    let Some(first) = records.next() else {
        bail!("{}: no header row", path.display());
    };
    let first = first.with_context(|| format!("read header: {}", path.display()))?;
    let headers: Vec<String> = first.iter().map(normalize_header).collect();
    let mut rows = Vec::new();
    for record in records {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let row: Vec<String> = (0..headers.len())
            .map(|idx| record.get(idx).unwrap_or("").to_string())
            .collect();
        rows.push(row);
    }
    Ok(CsvTable { headers, rows })
}
