//! Conversion pipeline: resolve input, read, classify, normalize, write.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use connprep_ingest::{NoConverter, prepare_input, read_csv_table, write_rows};
use connprep_map::classify_headers;
use connprep_model::{EndpointRow, Mode, TestRow};
use connprep_transform::{normalize_endpoints, normalize_tests};

use crate::cli::ConvertArgs;

/// Outcome of a completed conversion, for summary printing.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    pub mode: Mode,
    pub input: PathBuf,
    pub output: PathBuf,
    pub scanned: usize,
    pub emitted: usize,
    pub skipped: usize,
}

/// Runs one file conversion end to end.
///
/// # Errors
///
/// Fails on unreadable input, an unconvertible workbook, missing required
/// columns, or an unwritable output path. Row-level problems never fail the
/// run; they only show up in the counts.
pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let mode = Mode::from(args.mode);
    let input = prepare_input(&args.input, args.sheet.as_deref(), &NoConverter)?;
    let table = read_csv_table(&input)?;
    debug!(headers = ?table.headers, "parsed header row");
    let map = classify_headers(mode, &table.headers)?;
    debug!(?map, "classified columns");
    let (scanned, emitted, skipped) = match mode {
        Mode::Endpoints => {
            let normalized = normalize_endpoints(&table, &map);
            write_rows(&args.output, &EndpointRow::FIELDS, &normalized.rows)
                .with_context(|| format!("write {}", args.output.display()))?;
            (normalized.scanned, normalized.emitted(), normalized.skipped)
        }
        Mode::Tests => {
            let normalized = normalize_tests(&table, &map);
            write_rows(&args.output, &TestRow::FIELDS, &normalized.rows)
                .with_context(|| format!("write {}", args.output.display()))?;
            (normalized.scanned, normalized.emitted(), normalized.skipped)
        }
    };
    info!(mode = %mode, scanned, emitted, skipped, "conversion complete");
    Ok(ConvertResult {
        mode,
        input,
        output: args.output.clone(),
        scanned,
        emitted,
        skipped,
    })
}
