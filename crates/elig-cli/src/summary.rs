//! Run summary rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use elig_core::RunReport;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Print the per-partner and gold row counts for a completed run.
pub fn print_summary(report: &RunReport) {
    println!("Ingest timestamp: {}", report.ingest_ts);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Partner"),
        header_cell("Code"),
        header_cell("Bronze rows"),
        header_cell("Silver rows"),
        header_cell("Dropped"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    let mut total_bronze = 0usize;
    let mut total_silver = 0usize;
    for partner in &report.partners {
        let dropped = partner.bronze_rows - partner.silver_rows;
        total_bronze += partner.bronze_rows;
        total_silver += partner.silver_rows;
        let dropped_cell = if dropped > 0 {
            Cell::new(dropped).fg(Color::Yellow)
        } else {
            Cell::new(dropped)
        };
        table.add_row(vec![
            Cell::new(&partner.name),
            Cell::new(&partner.partner_code),
            Cell::new(partner.bronze_rows),
            Cell::new(partner.silver_rows),
            dropped_cell,
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(total_bronze).add_attribute(Attribute::Bold),
        Cell::new(total_silver).add_attribute(Attribute::Bold),
        Cell::new(total_bronze - total_silver).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!("Gold: {} ({} rows)", report.gold_path, report.gold_rows);
}
