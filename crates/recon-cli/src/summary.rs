use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use recon_cli::types::{BookingInspection, RowCounts, RunOutput};
use recon_model::{CellValue, ReportTable, RowCountCheck};

pub fn print_run(output: &RunOutput, preview: bool) {
    let run = &output.run;
    println!("Date token: {}", output.date_token);
    if preview {
        let recovered = run
            .recovery
            .as_ref()
            .map(|recovery| recovery.recovered.as_slice())
            .unwrap_or_default();
        println!("{}", report_table(&run.report, 1, recovered));
    }

    print_status(output);

    if let Some(unmatched) = run.unmatched_names() {
        println!();
        println!("Unmatched names:");
        println!("{}", report_table(unmatched, 0, &[]));
    }

    println!();
    if output.written.is_empty() {
        for file in output.emitted.files() {
            println!("Not written (dry run): {}", file.file_name);
        }
    } else {
        for path in &output.written {
            println!("Wrote: {}", path.display());
        }
    }
}

pub fn print_json(output: &RunOutput) -> Result<()> {
    let json =
        serde_json::to_string_pretty(&output.summary()).context("serialize run summary")?;
    println!("{json}");
    Ok(())
}

pub fn print_inspection(inspection: &BookingInspection) {
    println!("Booking Data Columns: {}", inspection.path.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Column"), header_cell("Use")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, column) in inspection.columns.iter().enumerate() {
        let is_time = inspection.time_column.as_deref() == Some(column.as_str());
        let usage = if is_time {
            Cell::new("appointment time")
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            dim_cell("-")
        };
        table.add_row(vec![Cell::new(index + 1), Cell::new(column), usage]);
    }
    println!("{table}");
    println!("Rows: {}", inspection.rows);
    if let Some(error) = &inspection.time_column_error {
        eprintln!("error: {error}");
    }
}

fn print_status(output: &RunOutput) {
    let run = &output.run;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Check"), header_cell("Result")]);
    apply_table_style(&mut table);

    let row_color = match run.row_check {
        RowCountCheck::Matched { .. } => Color::Green,
        RowCountCheck::Mismatched { .. } => Color::Yellow,
    };
    table.add_row(vec![
        Cell::new("Row count"),
        Cell::new(run.row_check.to_string()).fg(row_color),
    ]);
    for (label, count) in RowCounts::from_run(run).labelled() {
        table.add_row(vec![Cell::new(label), Cell::new(count)]);
    }
    if let Some(recovery) = &run.recovery {
        let color = if recovery.is_empty() {
            Color::Green
        } else {
            Color::Yellow
        };
        table.add_row(vec![
            Cell::new("Recovery"),
            Cell::new(recovery.to_string()).fg(color),
        ]);
    }
    let consent_cell = match run.unmatched_names() {
        Some(_) => Cell::new(run.consent.to_string())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        None => Cell::new(run.consent.to_string()),
    };
    table.add_row(vec![Cell::new("Consent names"), consent_cell]);
    println!("{table}");
}

/// Render any report table; rows whose id appears in `highlight` are marked.
///
/// `id_column` is the index of the record id column.
fn report_table<T: ReportTable + ?Sized>(
    report: &T,
    id_column: usize,
    highlight: &[String],
) -> Table {
    let mut table = Table::new();
    table.set_header(
        report
            .headers()
            .iter()
            .map(|header| header_cell(header))
            .collect::<Vec<_>>(),
    );
    apply_report_table_style(&mut table);
    for cells in report.cell_rows() {
        let recovered = matches!(
            cells.get(id_column),
            Some(Some(CellValue::Text(id))) if highlight.contains(id)
        );
        let row: Vec<Cell> = cells
            .iter()
            .enumerate()
            .map(|(index, cell)| value_cell(cell.as_ref(), recovered && index == id_column))
            .collect();
        table.add_row(row);
    }
    if report.row_count() == 0 {
        table.add_row(vec![dim_cell("(no rows)")]);
    }
    table
}

fn value_cell(value: Option<&CellValue>, recovered: bool) -> Cell {
    match value {
        Some(value) if recovered => Cell::new(value)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold),
        Some(value @ CellValue::Number(_)) => {
            Cell::new(value).set_alignment(CellAlignment::Right)
        }
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_report_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
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
