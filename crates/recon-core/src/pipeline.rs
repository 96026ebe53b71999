//! Daily reconciliation pipeline.
//!
//! Stages run in a fixed order, each consuming the previous stage's output:
//!
//! 1. **preprocess** - booking status filter and normalization, master keys
//! 2. **reconcile** - key join, integrity check, recovery of missing rows
//! 3. **consent** - name validation against the optional consent export
//!
//! Inputs and results are passed explicitly; nothing is persisted.

use std::time::Instant;

use serde::Serialize;
use tracing::{info, info_span};

use recon_model::{
    BookingRecord, ConsentOutcome, ConsentRecord, DailyReport, MasterRecord, ReconOptions,
    RecoveryOutcome, RowCountCheck, UnmatchedNamesReport,
};
use recon_transform::{preprocess_booking, preprocess_master};

use crate::consent::validate_consent;
use crate::reconcile::{Reconciliation, reconcile};

/// The exports for one run.
#[derive(Debug, Clone, Default)]
pub struct DailyInputs {
    pub booking: Vec<BookingRecord>,
    pub master: Vec<MasterRecord>,
    pub consent: Option<Vec<ConsentRecord>>,
}

/// Row counts gathered along the way, for the run summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub booking_rows: usize,
    pub scheduled_rows: usize,
    pub dropped_rows: usize,
    pub master_rows: usize,
    pub master_duplicate_rows: usize,
    pub consent_rows: Option<usize>,
}

/// Everything a run produces.
#[derive(Debug, Clone, Serialize)]
pub struct DailyRun {
    pub report: DailyReport,
    pub row_check: RowCountCheck,
    pub recovery: Option<RecoveryOutcome>,
    pub consent: ConsentOutcome,
    pub stats: RunStats,
}

impl DailyRun {
    /// Operator-facing status lines, in the order the checks ran.
    pub fn status_messages(&self) -> Vec<String> {
        let mut messages = vec![self.row_check.to_string()];
        if let Some(recovery) = &self.recovery {
            messages.push(recovery.to_string());
        }
        messages.push(self.consent.to_string());
        messages
    }

    pub fn unmatched_names(&self) -> Option<&UnmatchedNamesReport> {
        self.consent.unmatched()
    }

    pub fn recovered_count(&self) -> usize {
        self.recovery.as_ref().map_or(0, RecoveryOutcome::count)
    }
}

/// Run preprocessing, reconciliation and consent validation.
pub fn run_daily(inputs: &DailyInputs, options: &ReconOptions) -> DailyRun {
    let preprocess_span = info_span!("preprocess");
    let preprocess_start = Instant::now();
    let (booking, master) = preprocess_span.in_scope(|| {
        (
            preprocess_booking(&inputs.booking, options),
            preprocess_master(&inputs.master, options),
        )
    });
    info!(
        booking_rows = inputs.booking.len(),
        scheduled_rows = booking.len(),
        master_rows = inputs.master.len(),
        duration_ms = preprocess_start.elapsed().as_millis(),
        "preprocess complete"
    );

    let reconcile_span = info_span!("reconcile");
    let reconcile_start = Instant::now();
    let Reconciliation {
        report,
        row_check,
        recovery,
    } = reconcile_span.in_scope(|| reconcile(&booking, &master, options));
    info!(
        report_rows = report.len(),
        recovered = recovery.as_ref().map_or(0, RecoveryOutcome::count),
        duration_ms = reconcile_start.elapsed().as_millis(),
        "reconcile complete"
    );

    let consent_span = info_span!("consent");
    let consent = consent_span
        .in_scope(|| validate_consent(inputs.consent.as_deref(), &report, options));

    let stats = RunStats {
        booking_rows: inputs.booking.len(),
        scheduled_rows: booking.len(),
        dropped_rows: booking.dropped,
        master_rows: inputs.master.len(),
        master_duplicate_rows: master.duplicate_rows,
        consent_rows: inputs.consent.as_ref().map(Vec::len),
    };

    DailyRun {
        report,
        row_check,
        recovery,
        consent,
        stats,
    }
}
