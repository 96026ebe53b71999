//! Reconciliation check outcomes.
//!
//! `Display` renders the operator-facing status line for each outcome.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::report::UnmatchedNamesReport;

/// Row-count comparison between the filtered booking table and the join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RowCountCheck {
    Matched {
        booking_rows: usize,
        joined_rows: usize,
    },
    Mismatched {
        booking_rows: usize,
        joined_rows: usize,
    },
}

impl RowCountCheck {
    pub fn compare(booking_rows: usize, joined_rows: usize) -> Self {
        if booking_rows == joined_rows {
            Self::Matched {
                booking_rows,
                joined_rows,
            }
        } else {
            Self::Mismatched {
                booking_rows,
                joined_rows,
            }
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }
}

impl fmt::Display for RowCountCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matched {
                booking_rows,
                joined_rows,
            } => write!(
                f,
                "The original booking data has {booking_rows} rows, and the final merged data has {joined_rows} rows. The row count matches."
            ),
            Self::Mismatched {
                booking_rows,
                joined_rows,
            } => write!(
                f,
                "The original booking data has {booking_rows} rows, but the final merged data has {joined_rows} rows. The row count does not match."
            ),
        }
    }
}

/// Result of backfilling booking rows absent from the join.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecoveryOutcome {
    /// Record ids appended with empty measurements, in booking order.
    pub recovered: Vec<String>,
}

impl RecoveryOutcome {
    pub fn count(&self) -> usize {
        self.recovered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recovered.is_empty()
    }
}

impl fmt::Display for RecoveryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.recovered.is_empty() {
            f.write_str("No missing records found in booking data.")
        } else {
            write!(
                f,
                "Added {} missing records to the final data.",
                self.recovered.len()
            )
        }
    }
}

/// Result of comparing consent-form names with the daily report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConsentOutcome {
    /// No consent table was supplied.
    Skipped,
    /// Every joined row carried identical names.
    AllMatched { compared: usize },
    /// At least one joined row disagreed.
    Unmatched {
        compared: usize,
        report: UnmatchedNamesReport,
    },
}

impl ConsentOutcome {
    pub fn unmatched(&self) -> Option<&UnmatchedNamesReport> {
        match self {
            Self::Unmatched { report, .. } => Some(report),
            _ => None,
        }
    }
}

impl fmt::Display for ConsentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skipped => f.write_str("No consent file supplied; name validation skipped."),
            Self::AllMatched { .. } => f.write_str("All names are matched."),
            Self::Unmatched { report, .. } => {
                write!(f, "There are unmatched names: {} rows.", report.len())
            }
        }
    }
}
