//! Error types for report emission.

use std::path::PathBuf;

use rust_xlsxwriter::XlsxError;
use thiserror::Error;

/// Errors raised while naming, serializing or writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The booking file name has no `_`-separated date segment.
    #[error(
        "cannot derive a date token from '{file_name}': expected a name like 'Bookings_<date>-<suffix>.csv'"
    )]
    DateToken { file_name: String },

    /// The table does not fit in a worksheet.
    #[error("table with {rows} rows and {columns} columns exceeds worksheet limits")]
    TableTooLarge { rows: usize, columns: usize },

    #[error("xlsx serialization failed: {0}")]
    Xlsx(#[from] XlsxError),

    /// Failed to write a report to disk.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
