//! Raw CSV inspection tool.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use connprep_ingest::dump_csv;

#[derive(Parser)]
#[command(
    name = "connprep-inspect",
    version,
    about = "Dump raw CSV contents and per-field parse results",
    long_about = "Print a file's raw bytes with hidden characters made \
                  visible, then re-parse it as CSV and show every field's \
                  value. Useful when a normalization run drops rows and the \
                  input looks fine in a spreadsheet editor."
)]
struct Cli {
    /// CSV file to inspect.
    #[arg(value_name = "CSV_FILE")]
    csv_file: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(error) = dump_csv(&cli.csv_file, &mut out) {
        let _ = out.flush();
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
