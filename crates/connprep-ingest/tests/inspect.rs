use std::fs;

use connprep_ingest::dump_csv;
use tempfile::tempdir;

fn dump_to_string(contents: &str) -> String {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("dump.csv");
    fs::write(&path, contents).expect("write file");
    let mut out: Vec<u8> = Vec::new();
    dump_csv(&path, &mut out).expect("dump csv");
    String::from_utf8(out).expect("utf-8 report")
}

#[test]
fn report_contains_raw_and_parsed_sections() {
    let report = dump_to_string("test_id,enabled\nt1,YES\n");
    assert!(report.contains("--- RAW FILE CONTENT ---"));
    assert!(report.contains("\"test_id,enabled\\nt1,YES\\n\""));
    assert!(report.contains("--- CSV PARSING RESULTS ---"));
    assert!(report.contains("Headers: [\"test_id\", \"enabled\"]"));
    assert!(report.contains("Row 1:"));
    assert!(report.contains("  test_id: 't1' (escaped: \"t1\")"));
}

#[test]
fn enabled_column_gets_the_six_candidate_comparisons() {
    let report = dump_to_string("test_id,enabled\nt1,YES\n");
    assert!(report.contains("'enabled' value would match 'yes'?: false"));
    assert!(report.contains("'enabled' value would match 'YES'?: true"));
    assert!(report.contains("'enabled' value would match 'Yes'?: false"));
    assert!(report.contains("'enabled' value would match 'y'?: false"));
    assert!(report.contains("'enabled' value would match 'true'?: false"));
    assert!(report.contains("'enabled' value would match '1'?: false"));
}

#[test]
fn short_rows_are_flagged_and_extra_fields_labelled() {
    let report = dump_to_string("a,b\nonly\nx,y,z\n");
    assert!(report.contains("WARNING: Row has fewer fields (1) than headers (2)"));
    assert!(report.contains("  Column3: 'z' (escaped: \"z\")"));
}

#[test]
fn hidden_whitespace_is_made_visible() {
    let report = dump_to_string("a,enabled\nv,yes \n");
    // The trailing space survives parsing and shows up in the escaped form.
    assert!(report.contains("  enabled: 'yes ' (escaped: \"yes \")"));
    assert!(report.contains("'enabled' value would match 'yes'?: false"));
}
