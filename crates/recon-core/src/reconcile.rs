//! Booking/master join with row-count integrity check and recovery.
//!
//! The key join pairs each scheduled booking with every master entry sharing
//! its record id. Bookings without a master counterpart are absent from the
//! key join; the integrity check finds them by record id and the recovery
//! step appends them with empty measurements, so the finished report never
//! loses a booking row.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info, warn};

use recon_model::{
    BookingRecord, DailyReport, MasterEntry, Measurements, ReconOptions, RecoveryOutcome,
    ReportRow, RowCountCheck, ScheduledBooking,
};
use recon_transform::{BookingStage, MasterStage, prepare_booking};

/// Result of reconciling bookings against the master export.
#[derive(Debug, Clone)]
pub struct Reconciliation {
    pub report: DailyReport,
    /// Filtered booking rows compared with key-join rows.
    pub row_check: RowCountCheck,
    /// Present whenever the integrity check had to look for missing rows.
    pub recovery: Option<RecoveryOutcome>,
}

/// Pair bookings with master entries on record id, booking order first.
pub fn join_on_record_id(
    bookings: &[ScheduledBooking],
    master: &[MasterEntry],
) -> Vec<ReportRow> {
    let mut index: HashMap<&str, Vec<&MasterEntry>> = HashMap::with_capacity(master.len());
    for entry in master {
        index.entry(entry.record_id.as_str()).or_default().push(entry);
    }
    let mut joined = Vec::with_capacity(bookings.len());
    for booking in bookings {
        let Some(entries) = index.get(booking.record_id.as_str()) else {
            continue;
        };
        for entry in entries {
            joined.push(ReportRow::new(booking.clone(), entry.measurements.clone()));
        }
    }
    joined
}

/// Scheduled bookings whose record id does not appear in `report`.
pub fn missing_bookings<'a>(
    scheduled: &'a [BookingRecord],
    report: &DailyReport,
) -> Vec<&'a BookingRecord> {
    let present: HashSet<&str> = report
        .rows
        .iter()
        .map(|row| row.record_id.as_str())
        .collect();
    scheduled
        .iter()
        .filter(|record| !present.contains(record.record_id.as_str()))
        .collect()
}

/// Rebuild each missing booking from its source row and append it.
///
/// Recovered rows go after every joined row, in booking order; they are not
/// spliced back into their booking position.
pub fn recover_missing(report: &mut DailyReport, missing: &[&BookingRecord]) -> RecoveryOutcome {
    let mut recovered = Vec::with_capacity(missing.len());
    for record in missing {
        let row = ReportRow::new(prepare_booking(record), Measurements::default());
        recovered.push(row.record_id.clone());
        report.rows.push(row);
    }
    RecoveryOutcome { recovered }
}

/// Build the daily report from preprocessed booking and master data.
///
/// Joined rows come first in booking order. Bookings that never joined are
/// rebuilt without measurements and appended at the end of the report, again
/// in booking order, so a recovered row does not keep its booking position.
pub fn reconcile(
    booking: &BookingStage,
    master: &MasterStage,
    options: &ReconOptions,
) -> Reconciliation {
    let mut report = DailyReport::new(options.report_headers());
    report.rows = join_on_record_id(&booking.rows, &master.entries);

    let row_check = RowCountCheck::compare(booking.len(), report.len());
    if !row_check.is_match() {
        warn!(
            booking_rows = booking.len(),
            joined_rows = report.len(),
            "row count mismatch after join"
        );
    }

    // Fan-out from repeated master keys can mask a missing row, so look by id
    // rather than trusting equal counts.
    let missing = missing_bookings(&booking.scheduled, &report);
    let recovery = if row_check.is_match() && missing.is_empty() {
        None
    } else {
        let outcome = recover_missing(&mut report, &missing);
        if outcome.is_empty() {
            debug!("no missing booking rows");
        } else {
            info!(recovered = outcome.count(), "missing booking rows recovered");
        }
        Some(outcome)
    };

    Reconciliation {
        report,
        row_check,
        recovery,
    }
}
