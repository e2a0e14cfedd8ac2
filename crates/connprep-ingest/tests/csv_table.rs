use std::fs;

use connprep_ingest::read_csv_table;
use tempfile::tempdir;

#[test]
fn pads_short_rows_and_drops_extra_fields() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("ragged.csv");
    fs::write(&path, "A,B,C\n1,2\n1,2,3,4\n").expect("write file");
    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(table.headers, vec!["A", "B", "C"]);
    assert_eq!(table.rows[0], vec!["1", "2", ""]);
    assert_eq!(table.rows[1], vec!["1", "2", "3"]);
}

#[test]
fn strips_bom_and_collapses_header_whitespace() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("bom.csv");
    fs::write(&path, "\u{feff}Server  Address,Port\nweb,80\n").expect("write file");
    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(table.headers, vec!["Server Address", "Port"]);
    assert_eq!(table.rows, vec![vec!["web", "80"]]);
}

#[test]
fn preserves_cell_values_verbatim() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("spaced.csv");
    fs::write(&path, "A,B\n  spaced  ,x\n").expect("write file");
    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(table.rows[0][0], "  spaced  ");
}

#[test]
fn keeps_rows_whose_fields_are_all_empty() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("gaps.csv");
    fs::write(&path, "A,B\na,b\n,\nc,d\n").expect("write file");
    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.rows[1], vec!["", ""]);
}

#[test]
fn empty_file_is_an_error() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("empty.csv");
    fs::write(&path, "").expect("write file");
    let error = read_csv_table(&path).expect_err("no header row");
    assert!(error.to_string().contains("no header row"));
}

#[test]
fn missing_file_reports_the_path() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("absent.csv");
    let error = read_csv_table(&path).expect_err("file does not exist");
    assert!(error.to_string().contains("absent.csv"));
}
