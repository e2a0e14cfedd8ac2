pub mod csv_out;
pub mod csv_table;
pub mod inspect;
pub mod spreadsheet;

pub use csv_out::write_rows;
pub use csv_table::{CsvTable, read_csv_table};
pub use inspect::dump_csv;
pub use spreadsheet::{
    ConvertOutcome, NoConverter, SheetConverter, is_spreadsheet, prepare_input,
};
