//! Error types for export ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an export.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {source_name}: {message}")]
    CsvParse {
        source_name: String,
        message: String,
    },

    /// A configured column is absent from an export.
    #[error("required column '{column}' not found in {table} export (columns: {available})")]
    MissingColumn {
        table: &'static str,
        column: String,
        available: String,
    },

    /// No column name contains the appointment-time hint.
    #[error(
        "no appointment time column found in booking export: no column name contains '{hint}' (columns: {available})"
    )]
    TimeColumnNotFound { hint: String, available: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/file.csv");
    }

    #[test]
    fn test_time_column_error_names_hint() {
        let err = IngestError::TimeColumnNotFound {
            hint: "time".to_string(),
            available: "Status, record_id".to_string(),
        };
        assert!(err.to_string().contains("'time'"));
        assert!(err.to_string().contains("Status, record_id"));
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
