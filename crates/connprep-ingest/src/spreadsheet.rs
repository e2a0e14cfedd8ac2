//! Degraded-mode handling for spreadsheet inputs.
//!
//! Workbook conversion is an external capability with the contract
//! `convert(source, sheet) -> Converted | Unavailable`. The built-in
//! converter is always unavailable; when it reports so, the input is still
//! accepted if its content turns out to be plain delimited text.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::warn;

/// Result of asking a converter for a workbook-to-CSV conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertOutcome {
    /// The converter wrote a CSV rendition to the requested target path.
    Converted,
    /// No conversion capability is available.
    Unavailable,
}

/// External workbook-to-CSV conversion capability.
pub trait SheetConverter {
    /// Converts `source` (optionally a single worksheet) into CSV at `target`.
    ///
    /// # Errors
    ///
    /// Fails when a conversion was attempted and did not complete.
    fn convert(
        &self,
        source: &Path,
        sheet: Option<&str>,
        target: &Path,
    ) -> Result<ConvertOutcome>;
}

/// The built-in converter: no conversion library is bundled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoConverter;

impl SheetConverter for NoConverter {
    fn convert(
        &self,
        _source: &Path,
        _sheet: Option<&str>,
        _target: &Path,
    ) -> Result<ConvertOutcome> {
        Ok(ConvertOutcome::Unavailable)
    }
}

/// True when `path` carries a spreadsheet extension.
#[must_use]
pub fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx") || ext.eq_ignore_ascii_case("xls"))
}

/// Resolves the path the normalizer should actually read.
///
/// Plain inputs pass through untouched. Spreadsheet inputs go through the
/// converter; when that is unavailable, the file is copied verbatim to a
/// sibling `.csv` path if its content is already plain delimited text,
/// otherwise the run fails with guidance.
///
/// # Errors
///
/// Fails when the converter errors, or when an unconverted workbook is not
/// plain delimited text.
pub fn prepare_input(
    path: &Path,
    sheet: Option<&str>,
    converter: &dyn SheetConverter,
) -> Result<PathBuf> {
    if !is_spreadsheet(path) {
        return Ok(path.to_path_buf());
    }
    let target = path.with_extension("csv");
    match converter.convert(path, sheet, &target)? {
        ConvertOutcome::Converted => Ok(target),
        ConvertOutcome::Unavailable => {
            warn!(input = %path.display(), "no workbook conversion library available");
            println!("Note: no workbook conversion library is available.");
            println!(
                "Convert {} to CSV manually, or re-run once a converter is installed.",
                path.display()
            );
            if looks_like_delimited_text(path)? {
                println!("The file content is already plain text; continuing with a verbatim copy.");
                fs::copy(path, &target).with_context(|| {
                    format!("copy {} to {}", path.display(), target.display())
                })?;
                Ok(target)
            } else {
                bail!(
                    "{} is not plain delimited text; convert it to CSV and re-run",
                    path.display()
                );
            }
        }
    }
}

const ZIP_MAGIC: [u8; 4] = [0x50, 0x4b, 0x03, 0x04];

/// Content sniff: workbook containers start with ZIP magic and binary
/// formats carry NUL bytes; plain delimited text does neither.
fn looks_like_delimited_text(path: &Path) -> Result<bool> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    if bytes.starts_with(&ZIP_MAGIC) {
        return Ok(false);
    }
    let probe = &bytes[..bytes.len().min(4096)];
    Ok(!probe.contains(&0))
}
