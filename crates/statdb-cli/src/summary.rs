use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use statdb_cli::types::{FileOutcome, ImportResult};

pub fn print_summary(result: &ImportResult) {
    println!("Database: {}", result.db_path.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Table"),
        header_cell("Rows"),
        header_cell("Dropped"),
        header_cell("Status"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    let mut total_rows = 0usize;
    let mut total_dropped = 0usize;
    let mut loaded = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;

    for report in &result.files {
        match &report.outcome {
            FileOutcome::Loaded {
                table: table_name,
                rows,
                dropped,
            } => {
                loaded += 1;
                total_rows += rows;
                total_dropped += dropped;
                table.add_row(vec![
                    Cell::new(&report.file_name),
                    Cell::new(table_name),
                    Cell::new(rows),
                    Cell::new(dropped),
                    Cell::new("loaded").fg(Color::Green),
                ]);
            }
            FileOutcome::Skipped { reason } => {
                skipped += 1;
                table.add_row(vec![
                    Cell::new(&report.file_name),
                    dim_cell("-"),
                    dim_cell("-"),
                    dim_cell("-"),
                    Cell::new(format!("skipped: {reason}")).fg(Color::Yellow),
                ]);
            }
            FileOutcome::Failed { error } => {
                failed += 1;
                table.add_row(vec![
                    Cell::new(&report.file_name),
                    dim_cell("-"),
                    dim_cell("-"),
                    dim_cell("-"),
                    Cell::new(format!("failed: {error}")).fg(Color::Red),
                ]);
            }
        }
    }

    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} file(s)", result.files.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        Cell::new(total_dropped).add_attribute(Attribute::Bold),
        Cell::new(format!("{loaded} loaded, {skipped} skipped, {failed} failed"))
            .add_attribute(Attribute::Bold),
    ]);

    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn dim_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Dim)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
