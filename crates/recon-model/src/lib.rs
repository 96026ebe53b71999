//! Data model for the daily visit reconciler.
//!
//! - **records**: typed source records and preprocessed intermediates
//! - **report**: the daily report and unmatched-names tables
//! - **outcome**: integrity and consent check results
//! - **options**: column names and policies, loadable from a config file

pub mod options;
pub mod outcome;
pub mod records;
pub mod report;
pub mod value;

pub use options::{BookingColumns, ConsentColumns, MasterColumns, MasterDedup, ReconOptions};
pub use outcome::{ConsentOutcome, RecoveryOutcome, RowCountCheck};
pub use records::{
    BookingRecord, ConsentRecord, MasterEntry, MasterRecord, Measurements, ScheduledBooking,
};
pub use report::{DailyReport, ReportRow, ReportTable, UnmatchedName, UnmatchedNamesReport};
pub use value::{CellValue, format_numeric};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_serializes() {
        let check = RowCountCheck::compare(3, 4);
        let json = serde_json::to_string(&check).expect("serialize check");
        let round: RowCountCheck = serde_json::from_str(&json).expect("deserialize check");
        assert_eq!(round, check);
        assert!(json.contains("\"status\":\"mismatched\""));
    }

    #[test]
    fn report_headers_use_source_column_names() {
        let headers = ReconOptions::default().report_headers();
        assert_eq!(
            headers,
            vec![
                "appointment_time",
                "record_id",
                "first_name",
                "last_name",
                "Customer email",
                "phone_number",
                "phy_skin",
                "phy_sternal",
                "phy_waist_circ",
                "phy_arm",
            ]
        );
    }
}
