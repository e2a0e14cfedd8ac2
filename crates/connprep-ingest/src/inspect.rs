//! Raw CSV diagnostics: echoes file bytes and parsed field values.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

/// Literal candidates an `enabled` value is compared against, mirroring the
/// spellings users most often get wrong in hand-edited files.
const ENABLED_CANDIDATES: [&str; 6] = ["yes", "YES", "Yes", "y", "true", "1"];

/// Dumps `path`'s raw content and per-field parse results to `out`.
///
/// Purely diagnostic: reads the file and writes nothing but the report.
/// Field values are shown both plain and debug-escaped so hidden whitespace
/// and control characters become visible.
///
/// # Errors
///
/// Fails when the file cannot be read or parsed, or when `out` rejects a
/// write.
pub fn dump_csv(path: &Path, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Opening file: {}", path.display())?;
    let raw =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    writeln!(out)?;
    writeln!(out, "--- RAW FILE CONTENT ---")?;
    writeln!(out, "{raw:?}")?;

    writeln!(out)?;
    writeln!(out, "--- CSV PARSING RESULTS ---")?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.as_bytes());
    let mut records = reader.records();
    let Some(first) = records.next() else {
        writeln!(out, "No header row found")?;
        return Ok(());
    };
    let headers: Vec<String> = first
        .context("read header row")?
        .iter()
        .map(ToString::to_string)
        .collect();
    let shown: Vec<String> = headers.iter().map(|header| format!("{header:?}")).collect();
    writeln!(out, "Headers: [{}]", shown.join(", "))?;
    let enabled_column = headers.iter().position(|header| header == "enabled");

    for (index, record) in records.enumerate() {
        let record = record.with_context(|| format!("read row {}", index + 1))?;
        writeln!(out)?;
        writeln!(out, "Row {}:", index + 1)?;
        if record.len() < headers.len() {
            writeln!(
                out,
                "  WARNING: Row has fewer fields ({}) than headers ({})",
                record.len(),
                headers.len()
            )?;
        }
        for (column, value) in record.iter().enumerate() {
            match headers.get(column) {
                Some(header) => writeln!(out, "  {header}: '{value}' (escaped: {value:?})")?,
                None => {
                    writeln!(out, "  Column{}: '{value}' (escaped: {value:?})", column + 1)?;
                }
            }
        }
        if let Some(column) = enabled_column
            && let Some(value) = record.get(column)
        {
            for candidate in ENABLED_CANDIDATES {
                writeln!(
                    out,
                    "  'enabled' value would match '{candidate}'?: {}",
                    value == candidate
                )?;
            }
        }
    }
    Ok(())
}
