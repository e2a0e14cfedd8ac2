use std::fs;

use clap::ValueEnum;
use connprep_cli::cli::{ConvertArgs, ModeArg};
use connprep_cli::commands::run_convert;
use tempfile::tempdir;

#[test]
fn converts_endpoints_end_to_end() {
    let dir = tempdir().expect("create temp dir");
    let input = dir.path().join("endpoints.csv");
    let output = dir.path().join("out.csv");
    fs::write(
        &input,
        "Hostname,Port,Description\ndb.internal,1433,SQL\n,5000,bad\n",
    )
    .expect("write input");
    let args = ConvertArgs {
        input,
        output: output.clone(),
        mode: ModeArg::Endpoints,
        sheet: None,
    };
    let result = run_convert(&args).expect("run conversion");
    assert_eq!(result.scanned, 2);
    assert_eq!(result.emitted, 1);
    assert_eq!(result.skipped, 1);
    let written = fs::read_to_string(&output).expect("read output");
    assert_eq!(
        written,
        "endpoint_type,hostname,port,description,resource_group,subscription_id\n\
         custom,db.internal,1433,SQL,unknown,unknown\n"
    );
}

#[test]
fn converts_tests_end_to_end() {
    let dir = tempdir().expect("create temp dir");
    let input = dir.path().join("tests.csv");
    let output = dir.path().join("out.csv");
    fs::write(
        &input,
        "Source,Destination,Enabled\nvm-a,db.internal,TRUE\nvm-b,web,off\n",
    )
    .expect("write input");
    let args = ConvertArgs {
        input,
        output: output.clone(),
        mode: ModeArg::Tests,
        sheet: None,
    };
    let result = run_convert(&args).expect("run conversion");
    assert_eq!(result.emitted, 2);
    let written = fs::read_to_string(&output).expect("read output");
    assert_eq!(
        written,
        "test_id,source_type,source,destination_type,destination,enabled\n\
         test_1,auto,vm-a,auto,db.internal,yes\n\
         test_2,auto,vm-b,auto,web,no\n"
    );
}

#[test]
fn missing_required_columns_fail_without_output() {
    let dir = tempdir().expect("create temp dir");
    let input = dir.path().join("input.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, "Label,Value\nfoo,1\n").expect("write input");
    let args = ConvertArgs {
        input,
        output: output.clone(),
        mode: ModeArg::Endpoints,
        sheet: None,
    };
    let error = run_convert(&args).expect_err("no hostname or port columns");
    assert!(error.to_string().contains("hostname"));
    assert!(error.to_string().contains("port"));
    assert!(!output.exists());
}

#[test]
fn missing_input_file_fails() {
    let dir = tempdir().expect("create temp dir");
    let args = ConvertArgs {
        input: dir.path().join("absent.csv"),
        output: dir.path().join("out.csv"),
        mode: ModeArg::Tests,
        sheet: None,
    };
    let error = run_convert(&args).expect_err("input does not exist");
    assert!(error.to_string().contains("absent.csv"));
}

#[test]
fn unknown_mode_is_rejected_at_parse_time() {
    assert!(ModeArg::from_str("foo", true).is_err());
    assert!(ModeArg::from_str("endpoints", true).is_ok());
    assert!(ModeArg::from_str("tests", true).is_ok());
}

#[test]
fn misnamed_workbook_input_runs_in_degraded_mode() {
    let dir = tempdir().expect("create temp dir");
    let input = dir.path().join("endpoints.xlsx");
    let output = dir.path().join("out.csv");
    fs::write(&input, "Host,Port\nweb,80\n").expect("write input");
    let args = ConvertArgs {
        input,
        output: output.clone(),
        mode: ModeArg::Endpoints,
        sheet: None,
    };
    let result = run_convert(&args).expect("degraded-mode conversion");
    assert_eq!(result.emitted, 1);
    assert_eq!(result.input, dir.path().join("endpoints.csv"));
    assert!(output.exists());
}
