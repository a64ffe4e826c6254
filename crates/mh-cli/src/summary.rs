use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: - (dry run)"),
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Rows"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![Cell::new("Scanned"), Cell::new(result.total_rows)]);
    table.add_row(vec![
        Cell::new("Excluded by keyword"),
        count_cell(result.excluded_rows, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("No keyword match"),
        count_cell(result.unmatched_rows, Color::DarkGrey),
    ]);
    table.add_row(vec![
        Cell::new("Without dating"),
        count_cell(result.undated_records, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Kept")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.kept_rows)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    println!(
        "{} buildings selected (out of {} rows).",
        result.kept_rows, result.total_rows
    );
    if let Some(path) = &result.output {
        println!("Exported to {}", path.display());
    }
    if !result.missing_columns.is_empty() {
        eprintln!("Missing columns:");
        for column in &result.missing_columns {
            eprintln!("- {column}");
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
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
