//! CLI argument definitions for the normalizer.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use connprep_model::Mode;

#[derive(Parser)]
#[command(
    name = "connprep",
    version,
    about = "Normalize loosely-structured CSV input for connectivity testing",
    long_about = "Normalize endpoint and connectivity-test definitions from \
                  loosely-structured CSV files into the fixed schemas the \
                  connectivity checker consumes.\n\n\
                  Column roles are detected from header names; rows missing \
                  required fields are dropped and reported in the summary. \
                  Spreadsheet inputs are accepted in a degraded mode when \
                  their content is already plain text."
)]
pub struct Cli {
    #[command(flatten)]
    pub convert: ConvertArgs,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Positional conversion arguments.
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Input file: CSV, or a workbook accepted in degraded mode.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV file to write.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Which fixed schema to produce.
    #[arg(value_name = "MODE", value_enum)]
    pub mode: ModeArg,

    /// Worksheet to convert when the input is a workbook.
    #[arg(value_name = "SHEET")]
    pub sheet: Option<String>,
}

/// CLI conversion modes.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ModeArg {
    Endpoints,
    Tests,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Endpoints => Self::Endpoints,
            ModeArg::Tests => Self::Tests,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
