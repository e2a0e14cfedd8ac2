use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use connprep_ingest::{ConvertOutcome, NoConverter, SheetConverter, is_spreadsheet, prepare_input};
use tempfile::tempdir;

#[test]
fn spreadsheet_extensions_are_detected_case_insensitively() {
    assert!(is_spreadsheet(Path::new("data.xlsx")));
    assert!(is_spreadsheet(Path::new("DATA.XLS")));
    assert!(!is_spreadsheet(Path::new("data.csv")));
    assert!(!is_spreadsheet(Path::new("data")));
}

#[test]
fn plain_inputs_pass_through_untouched() {
    let path = PathBuf::from("endpoints.csv");
    let resolved = prepare_input(&path, None, &NoConverter).expect("prepare input");
    assert_eq!(resolved, path);
}

#[test]
fn misnamed_workbook_with_text_content_is_copied_verbatim() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("endpoints.xlsx");
    fs::write(&path, "Hostname,Port\nweb,80\n").expect("write file");
    let resolved = prepare_input(&path, None, &NoConverter).expect("prepare input");
    assert_eq!(resolved, dir.path().join("endpoints.csv"));
    let copied = fs::read_to_string(&resolved).expect("read copy");
    assert_eq!(copied, "Hostname,Port\nweb,80\n");
}

#[test]
fn real_workbook_content_fails_with_guidance() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("endpoints.xlsx");
    fs::write(&path, [0x50, 0x4b, 0x03, 0x04, 0x00, 0x00]).expect("write file");
    let error = prepare_input(&path, None, &NoConverter).expect_err("zip content");
    assert!(error.to_string().contains("convert it to CSV"));
    assert!(!dir.path().join("endpoints.csv").exists());
}

struct FixedConverter {
    content: &'static str,
}

impl SheetConverter for FixedConverter {
    fn convert(
        &self,
        _source: &Path,
        sheet: Option<&str>,
        target: &Path,
    ) -> Result<ConvertOutcome> {
        assert_eq!(sheet, Some("Endpoints"));
        fs::write(target, self.content)?;
        Ok(ConvertOutcome::Converted)
    }
}

#[test]
fn available_converter_takes_precedence_over_the_degraded_path() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("book.xlsx");
    fs::write(&path, [0x50, 0x4b, 0x03, 0x04]).expect("write file");
    let converter = FixedConverter {
        content: "Hostname,Port\napp,443\n",
    };
    let resolved =
        prepare_input(&path, Some("Endpoints"), &converter).expect("prepare input");
    assert_eq!(resolved, dir.path().join("book.csv"));
    let converted = fs::read_to_string(&resolved).expect("read conversion");
    assert_eq!(converted, "Hostname,Port\napp,443\n");
}
