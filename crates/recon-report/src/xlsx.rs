//! Worksheet serialization for report tables.

use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet};

use recon_model::{CellValue, ReportTable};

use crate::error::{ReportError, Result};

/// Name of the single worksheet in each workbook.
pub const SHEET_NAME: &str = "Sheet1";

/// Serialize a table into an in-memory xlsx workbook.
///
/// The first row holds the bold headers. Numbers become numeric cells, text
/// becomes string cells and missing values leave the cell empty.
pub fn table_to_xlsx<T: ReportTable + ?Sized>(table: &T) -> Result<Vec<u8>> {
    let headers = table.headers();
    let rows = table.cell_rows();
    let too_large = || ReportError::TableTooLarge {
        rows: rows.len(),
        columns: headers.len(),
    };

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let bold = Format::new().set_bold();
    for (col, header) in headers.iter().enumerate() {
        let col = ColNum::try_from(col).map_err(|_| too_large())?;
        worksheet.write_string_with_format(0, col, header, &bold)?;
    }

    for (index, cells) in rows.iter().enumerate() {
        let row = RowNum::try_from(index + 1).map_err(|_| too_large())?;
        for (col, cell) in cells.iter().enumerate() {
            let col = ColNum::try_from(col).map_err(|_| too_large())?;
            write_cell(worksheet, row, col, cell.as_ref())?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: RowNum,
    col: ColNum,
    cell: Option<&CellValue>,
) -> Result<()> {
    match cell {
        Some(CellValue::Number(value)) => {
            worksheet.write_number(row, col, *value)?;
        }
        Some(CellValue::Text(text)) => {
            worksheet.write_string(row, col, text)?;
        }
        None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use recon_model::{DailyReport, ReconOptions, ReportRow};

    #[test]
    fn empty_report_still_produces_a_workbook() {
        let report = DailyReport::new(ReconOptions::default().report_headers());
        let bytes = table_to_xlsx(&report).expect("serialize");
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn rows_grow_the_workbook() {
        let mut report = DailyReport::new(ReconOptions::default().report_headers());
        let empty = table_to_xlsx(&report).expect("serialize").len();
        for index in 0..50 {
            report.rows.push(ReportRow {
                record_id: format!("{index}-B"),
                first_name: Some(format!("Participant {index}")),
                ..ReportRow::default()
            });
        }
        let filled = table_to_xlsx(&report).expect("serialize").len();
        assert!(filled > empty);
    }
}
