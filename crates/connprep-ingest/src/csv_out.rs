//! Fixed-schema CSV output.

use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;

/// Writes `rows` to `path` with `fields` as the header line.
///
/// The header is written even when there are no rows. Quoting and escaping
/// follow standard delimited-text rules, so embedded delimiters, quotes and
/// newlines survive a round-trip.
///
/// # Errors
///
/// Fails when the file cannot be created or a record cannot be written.
pub fn write_rows<S: Serialize>(path: &Path, fields: &[&str], rows: &[S]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("write csv: {}", path.display()))?;
    writer
        .write_record(fields)
        .with_context(|| format!("write header: {}", path.display()))?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("write record: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;
    Ok(())
}
