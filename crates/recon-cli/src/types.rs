use std::path::PathBuf;

use serde::Serialize;

use recon_core::DailyRun;
use recon_model::RowCountCheck;
use recon_report::EmittedReports;

/// Inputs and output choices for one reconciliation run.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub booking: PathBuf,
    pub master: PathBuf,
    pub consent: Option<PathBuf>,
    pub output_dir: PathBuf,
    /// Use this token instead of deriving it from the booking file name.
    pub date_token: Option<String>,
    /// Serialize the workbooks but do not write them.
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct RunOutput {
    pub date_token: String,
    pub run: DailyRun,
    pub emitted: EmittedReports,
    /// Paths written to disk; empty on a dry run.
    pub written: Vec<PathBuf>,
}

/// Machine-readable run summary for `--json`.
#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub date_token: &'a str,
    pub status_messages: Vec<String>,
    pub row_check: &'a RowCountCheck,
    pub recovery: Option<&'a recon_model::RecoveryOutcome>,
    pub consent: &'a recon_model::ConsentOutcome,
    pub stats: &'a recon_core::RunStats,
    pub report_rows: usize,
    pub row_counts: RowCounts,
    pub files: Vec<FileSummary>,
}

/// Row counts at each stage of a run.
///
/// `joined` is taken straight after the master join, before missing bookings
/// are recovered, so it can be lower than `report`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowCounts {
    pub scheduled: usize,
    pub joined: usize,
    pub recovered: usize,
    pub report: usize,
}

impl RowCounts {
    pub fn from_run(run: &DailyRun) -> Self {
        let (scheduled, joined) = match run.row_check {
            RowCountCheck::Matched {
                booking_rows,
                joined_rows,
            }
            | RowCountCheck::Mismatched {
                booking_rows,
                joined_rows,
            } => (booking_rows, joined_rows),
        };
        Self {
            scheduled,
            joined,
            recovered: run.recovered_count(),
            report: run.report.len(),
        }
    }

    /// Display labels paired with their counts, in pipeline order.
    pub fn labelled(&self) -> [(&'static str, usize); 4] {
        [
            ("Scheduled booking rows", self.scheduled),
            ("Joined rows (before recovery)", self.joined),
            ("Recovered rows", self.recovered),
            ("Report rows", self.report),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct FileSummary {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: usize,
    /// `None` when the file was not written.
    pub path: Option<PathBuf>,
}

impl RunOutput {
    pub fn summary(&self) -> RunSummary<'_> {
        let files = self
            .emitted
            .files()
            .map(|file| FileSummary {
                file_name: file.file_name.clone(),
                mime_type: file.mime_type,
                bytes: file.bytes.len(),
                path: self
                    .written
                    .iter()
                    .find(|path| path.ends_with(&file.file_name))
                    .cloned(),
            })
            .collect();
        RunSummary {
            date_token: &self.date_token,
            status_messages: self.run.status_messages(),
            row_check: &self.run.row_check,
            recovery: self.run.recovery.as_ref(),
            consent: &self.run.consent,
            stats: &self.run.stats,
            report_rows: self.run.report.len(),
            row_counts: RowCounts::from_run(&self.run),
            files,
        }
    }
}

/// Columns of a booking export and the resolved appointment-time column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingInspection {
    pub path: PathBuf,
    pub columns: Vec<String>,
    pub rows: usize,
    pub time_column: Option<String>,
    /// Why no time column could be resolved.
    pub time_column_error: Option<String>,
}
