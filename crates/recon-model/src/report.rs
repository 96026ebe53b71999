//! Output tables.

use serde::{Deserialize, Serialize};

use crate::records::{Measurements, ScheduledBooking};
use crate::value::CellValue;

/// A rectangular table that can be rendered on screen or written to a sheet.
pub trait ReportTable {
    /// Column headers, in output order.
    fn headers(&self) -> &[String];

    /// Row values in header order; `None` is an empty cell.
    fn cell_rows(&self) -> Vec<Vec<Option<CellValue>>>;

    fn row_count(&self) -> usize;
}

/// One row of the daily report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub appointment_time: Option<String>,
    pub record_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub customer_email: Option<String>,
    pub phone_number: Option<String>,
    pub measurements: Measurements,
}

impl ReportRow {
    pub fn new(booking: ScheduledBooking, measurements: Measurements) -> Self {
        Self {
            appointment_time: booking.appointment_time,
            record_id: booking.record_id,
            first_name: booking.first_name,
            last_name: booking.last_name,
            customer_email: booking.customer_email,
            phone_number: booking.phone_number,
            measurements,
        }
    }

    pub fn values(&self) -> Vec<Option<CellValue>> {
        let mut values = Vec::with_capacity(10);
        values.push(text_cell(self.appointment_time.as_deref()));
        values.push(Some(CellValue::from(self.record_id.as_str())));
        values.push(text_cell(self.first_name.as_deref()));
        values.push(text_cell(self.last_name.as_deref()));
        values.push(text_cell(self.customer_email.as_deref()));
        values.push(text_cell(self.phone_number.as_deref()));
        values.extend(self.measurements.values().into_iter().map(|v| v.cloned()));
        values
    }
}

/// The reconciled daily report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub headers: Vec<String>,
    pub rows: Vec<ReportRow>,
}

impl DailyReport {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether any row carries `record_id`.
    pub fn contains_record(&self, record_id: &str) -> bool {
        self.rows.iter().any(|row| row.record_id == record_id)
    }
}

impl ReportTable for DailyReport {
    fn headers(&self) -> &[String] {
        &self.headers
    }

    fn cell_rows(&self) -> Vec<Vec<Option<CellValue>>> {
        self.rows.iter().map(ReportRow::values).collect()
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// A consent row whose names disagree with the daily report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmatchedName {
    pub record_id: String,
    pub consent_first_name: Option<String>,
    pub consent_last_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UnmatchedName {
    pub fn values(&self) -> Vec<Option<CellValue>> {
        vec![
            Some(CellValue::from(self.record_id.as_str())),
            text_cell(self.consent_first_name.as_deref()),
            text_cell(self.consent_last_name.as_deref()),
            text_cell(self.first_name.as_deref()),
            text_cell(self.last_name.as_deref()),
        ]
    }
}

/// Consent/report rows with disagreeing names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnmatchedNamesReport {
    pub headers: Vec<String>,
    pub rows: Vec<UnmatchedName>,
}

impl UnmatchedNamesReport {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ReportTable for UnmatchedNamesReport {
    fn headers(&self) -> &[String] {
        &self.headers
    }

    fn cell_rows(&self) -> Vec<Vec<Option<CellValue>>> {
        self.rows.iter().map(UnmatchedName::values).collect()
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }
}

// Report cells are written verbatim: no trimming, no numeric coercion.
fn text_cell(value: Option<&str>) -> Option<CellValue> {
    value.map(CellValue::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_row_values_follow_column_order() {
        let row = ReportRow {
            appointment_time: Some("9:05 AM".to_string()),
            record_id: "101-B".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            customer_email: None,
            phone_number: Some("(512) 555-0100".to_string()),
            measurements: Measurements {
                skin: Some(CellValue::Number(12.0)),
                ..Measurements::default()
            },
        };
        let values = row.values();
        assert_eq!(values.len(), 10);
        assert_eq!(values[0], Some(CellValue::from("9:05 AM")));
        assert_eq!(values[1], Some(CellValue::from("101-B")));
        assert_eq!(values[4], None);
        assert_eq!(values[6], Some(CellValue::Number(12.0)));
        assert_eq!(values[9], None);
    }

    #[test]
    fn numeric_looking_text_stays_text() {
        let row = ReportRow {
            record_id: "0042-B".to_string(),
            phone_number: Some("5550100".to_string()),
            ..ReportRow::default()
        };
        let values = row.values();
        assert_eq!(values[5], Some(CellValue::from("5550100")));
    }
}
