use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_cli::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Roster: {}", result.roster_csv.display());
    println!("Output: {}", result.output_dir.display());
    if result.dry_run {
        println!("Dry run: no files were written");
    } else {
        println!("Store: {}", result.store_path.display());
        for path in result.reports.paths() {
            println!("Error report: {}", path.display());
        }
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_counts_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Total records"),
        Cell::new(result.total_records),
    ]);
    table.add_row(vec![
        Cell::new("Clean records"),
        count_cell_ok(result.clean_records),
    ]);
    table.add_row(vec![
        Cell::new("Failed rows"),
        count_cell(result.failed_rows, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Error entries"),
        count_cell(result.error_entry_count(), Color::Red),
    ]);
    println!("{table}");

    print_entry_table(result);

    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

fn print_entry_table(result: &RunResult) {
    if result.entries.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Index"),
        header_cell("Employee"),
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Message"),
    ]);
    apply_entry_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for entry in &result.entries {
        table.add_row(vec![
            Cell::new(entry.record_index),
            Cell::new(&entry.employee_id),
            Cell::new(entry.field.name()).fg(Color::Red),
            Cell::new(&entry.value),
            Cell::new(&entry.message),
        ]);
    }
    println!();
    println!("Validation errors:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_counts_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(60);
}

fn apply_entry_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn count_cell_ok(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
