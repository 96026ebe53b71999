//! File-level pipeline: read the exports, reconcile, emit the workbooks.
//!
//! Stage spans (`ingest`, `emit`) live here; the core opens its own spans
//! for `preprocess`, `reconcile` and `consent`.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, trace};

use recon_core::{DailyInputs, run_daily};
use recon_ingest::{
    column_names, read_booking, read_consent, read_csv_file, read_master, resolve_time_column,
};
use recon_model::ReconOptions;
use recon_report::{date_token_from_filename, emit_reports};

use crate::logging::redact_option;
use crate::types::{BookingInspection, RunOutput, RunRequest};

/// The override when given, otherwise the token derived from the booking file name.
pub fn resolve_date_token(request: &RunRequest) -> Result<String> {
    match &request.date_token {
        Some(token) => Ok(token.clone()),
        None => date_token_from_filename(&request.booking).context("derive date token"),
    }
}

/// Read and validate the booking, master and optional consent exports.
pub fn load_inputs(request: &RunRequest, options: &ReconOptions) -> Result<DailyInputs> {
    let span = info_span!("ingest", booking = %request.booking.display());
    let start = Instant::now();
    span.in_scope(|| -> Result<DailyInputs> {
        let booking = read_booking(&request.booking, options)
            .with_context(|| format!("load booking export {}", request.booking.display()))?;
        let master = read_master(&request.master, options)
            .with_context(|| format!("load master export {}", request.master.display()))?;
        let consent = request
            .consent
            .as_deref()
            .map(|path| {
                read_consent(path, options)
                    .with_context(|| format!("load consent export {}", path.display()))
            })
            .transpose()?;
        info!(
            booking_rows = booking.len(),
            master_rows = master.len(),
            consent_rows = consent.as_ref().map(Vec::len),
            time_column = %booking.time_column,
            duration_ms = start.elapsed().as_millis(),
            "ingest complete"
        );
        Ok(DailyInputs {
            booking: booking.records,
            master,
            consent,
        })
    })
}

/// Run one reconciliation end to end.
///
/// The date token is resolved before any export is read so a badly named
/// booking file fails fast.
pub fn execute(request: &RunRequest, options: &ReconOptions) -> Result<RunOutput> {
    let date_token = resolve_date_token(request)?;
    debug!(date_token = %date_token, "date token resolved");

    let inputs = load_inputs(request, options)?;
    let run = run_daily(&inputs, options);
    if let Some(unmatched) = run.unmatched_names() {
        for row in &unmatched.rows {
            trace!(
                record_id = %row.record_id,
                consent_first_name = redact_option(row.consent_first_name.as_deref()),
                consent_last_name = redact_option(row.consent_last_name.as_deref()),
                first_name = redact_option(row.first_name.as_deref()),
                last_name = redact_option(row.last_name.as_deref()),
                "name mismatch"
            );
        }
    }

    let span = info_span!("emit", date_token = %date_token);
    let start = Instant::now();
    let (emitted, written) = span.in_scope(|| -> Result<_> {
        let emitted = emit_reports(&run.report, run.unmatched_names(), &date_token)
            .context("serialize reports")?;
        let written = if request.dry_run {
            debug!("dry run, skipping writes");
            Vec::new()
        } else {
            emitted
                .write_all(&request.output_dir)
                .context("write reports")?
        };
        info!(
            files = emitted.files().count(),
            written = written.len(),
            duration_ms = start.elapsed().as_millis(),
            "emit complete"
        );
        Ok((emitted, written))
    })?;

    Ok(RunOutput {
        date_token,
        run,
        emitted,
        written,
    })
}

/// List a booking export's columns and resolve its appointment-time column.
pub fn inspect_booking(path: &Path, options: &ReconOptions) -> Result<BookingInspection> {
    let df = read_csv_file(path).with_context(|| format!("read {}", path.display()))?;
    let columns = column_names(&df);
    let resolved = resolve_time_column(
        &columns,
        options.booking.appointment.as_deref(),
        &options.time_column_hint,
    )
    .map(str::to_string);
    let (time_column, time_column_error) = match resolved {
        Ok(column) => (Some(column), None),
        Err(error) => (None, Some(error.to_string())),
    };
    Ok(BookingInspection {
        path: path.to_path_buf(),
        rows: df.height(),
        columns,
        time_column,
        time_column_error,
    })
}
