//! Booking preprocessing: status filter and field normalization.

use tracing::debug;

use recon_model::{BookingRecord, ReconOptions, ScheduledBooking};

use crate::normalization::{appointment_time, normalize_phone};

/// Output of booking preprocessing.
#[derive(Debug, Clone, Default)]
pub struct BookingStage {
    /// Source rows that passed the status filter, unmodified.
    ///
    /// Kept so the reconciler can rebuild rows it finds missing from the join.
    pub scheduled: Vec<BookingRecord>,
    /// Normalized rows, one per entry of `scheduled`, same order.
    pub rows: Vec<ScheduledBooking>,
    /// Rows dropped by the status filter.
    pub dropped: usize,
}

impl BookingStage {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Keep rows whose status equals `status` exactly (case-sensitive).
pub fn filter_scheduled(records: &[BookingRecord], status: &str) -> Vec<BookingRecord> {
    records
        .iter()
        .filter(|record| record.status.as_deref() == Some(status))
        .cloned()
        .collect()
}

/// Normalize the phone number and extract the appointment time of one row.
///
/// Status and the raw appointment text are not carried over.
pub fn prepare_booking(record: &BookingRecord) -> ScheduledBooking {
    ScheduledBooking {
        appointment_time: appointment_time(record.appointment.as_deref()),
        record_id: record.record_id.clone(),
        first_name: record.first_name.clone(),
        last_name: record.last_name.clone(),
        customer_email: record.customer_email.clone(),
        phone_number: normalize_phone(record.phone_number.as_deref()),
    }
}

/// Filter and normalize the booking table.
pub fn preprocess_booking(records: &[BookingRecord], options: &ReconOptions) -> BookingStage {
    let scheduled = filter_scheduled(records, &options.scheduled_status);
    let rows: Vec<ScheduledBooking> = scheduled.iter().map(prepare_booking).collect();
    let dropped = records.len() - scheduled.len();
    let without_time = rows
        .iter()
        .filter(|row| row.appointment_time.is_none())
        .count();
    debug!(
        input_rows = records.len(),
        scheduled_rows = rows.len(),
        dropped,
        without_time,
        "booking preprocessed"
    );
    BookingStage {
        scheduled,
        rows,
        dropped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(record_id: &str, status: &str) -> BookingRecord {
        BookingRecord {
            record_id: record_id.to_string(),
            status: Some(status.to_string()),
            appointment: Some("2024-05-01, 9:05 AM PDT".to_string()),
            phone_number: Some("5125550100".to_string()),
            ..BookingRecord::default()
        }
    }

    #[test]
    fn status_filter_is_case_sensitive() {
        let records = vec![
            booking("1-B", "Scheduled"),
            booking("2-B", "scheduled"),
            booking("3-B", "Cancelled"),
            BookingRecord {
                record_id: "4-B".to_string(),
                ..BookingRecord::default()
            },
        ];
        let stage = preprocess_booking(&records, &ReconOptions::default());
        assert_eq!(stage.len(), 1);
        assert_eq!(stage.rows[0].record_id, "1-B");
        assert_eq!(stage.dropped, 3);
    }

    #[test]
    fn prepare_normalizes_fields() {
        let row = prepare_booking(&booking("1-B", "Scheduled"));
        assert_eq!(row.appointment_time.as_deref(), Some("9:05 AM"));
        assert_eq!(row.phone_number.as_deref(), Some("(512) 555-0100"));
    }

    #[test]
    fn scheduled_rows_keep_source_values() {
        let stage = preprocess_booking(&[booking("1-B", "Scheduled")], &ReconOptions::default());
        assert_eq!(stage.scheduled[0].phone_number.as_deref(), Some("5125550100"));
    }
}
