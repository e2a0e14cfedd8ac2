//! Human-facing summary output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::ConvertResult;

pub fn print_summary(result: &ConvertResult) {
    println!("Processed {} {}", result.emitted, result.mode.unit_noun());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Mode"),
        header_cell("Scanned"),
        header_cell("Emitted"),
        header_cell("Skipped"),
        header_cell("Output"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(result.mode)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(result.scanned),
        Cell::new(result.emitted).fg(Color::Green),
        skipped_cell(result.skipped),
        Cell::new(result.output.display()),
    ]);
    println!("{table}");
}

fn skipped_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell(count)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
