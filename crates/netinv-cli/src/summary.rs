//! Terminal run summary rendered with `comfy-table`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::CleanResult;

pub fn print_summary(result: &CleanResult) {
    println!("Input: {}", result.input.display());
    if let Some(path) = &result.cleaned_csv {
        println!("Cleaned CSV: {}", path.display());
    }
    if let Some(path) = &result.anomaly_json {
        println!("Anomaly report: {}", path.display());
    }

    let stats = &result.stats;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Valid"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("IP"),
        valid_cell(stats.ip_valid, stats.rows),
        Cell::new(stats.rows),
    ]);
    table.add_row(vec![
        Cell::new("Hostname"),
        valid_cell(stats.hostname_valid, stats.rows),
        Cell::new(stats.rows),
    ]);
    table.add_row(vec![
        Cell::new("FQDN consistent"),
        valid_cell(stats.fqdn_consistent, stats.rows),
        Cell::new(stats.rows),
    ]);
    table.add_row(vec![
        Cell::new("MAC"),
        valid_cell(stats.mac_valid, stats.rows),
        Cell::new(stats.rows),
    ]);
    table.add_row(vec![
        Cell::new("Site mapped"),
        valid_cell(stats.sites_normalized, stats.rows),
        Cell::new(stats.rows),
    ]);
    table.add_row(vec![
        Cell::new("Device type"),
        Cell::new(format!(
            "high {} / medium {} / low {}",
            stats.device_high, stats.device_medium, stats.device_low
        )),
        Cell::new(stats.rows),
    ]);
    println!("{table}");

    print_anomaly_table(result);
}

fn print_anomaly_table(result: &CleanResult) {
    if result.report.is_empty() {
        println!("No anomalies.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Issue"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (kind, count) in result.report.counts_by_kind() {
        table.add_row(vec![
            Cell::new(kind.as_str()),
            Cell::new(count).fg(Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.report.len()).add_attribute(Attribute::Bold),
    ]);
    println!();
    println!(
        "Anomalies ({} across {} rows):",
        result.report.len(),
        result.report.rows_affected()
    );
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn valid_cell(valid: usize, rows: usize) -> Cell {
    let cell = Cell::new(format!("{valid}/{rows}"));
    if valid < rows {
        cell.fg(Color::Yellow)
    } else {
        cell.fg(Color::Green)
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
