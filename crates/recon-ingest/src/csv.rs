//! CSV file reading into Polars DataFrames.
//!
//! Every column is read as text so identifiers, phone numbers and names keep
//! their exported spelling. Empty fields become nulls.

use std::io::Cursor;
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

fn text_read_options() -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
}

/// Reads a CSV file from disk.
pub fn read_csv_file(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let df = text_read_options()
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            source_name: path.display().to_string(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            source_name: path.display().to_string(),
            message: e.to_string(),
        })?;
    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "csv loaded"
    );
    Ok(df)
}

/// Reads CSV content already held in memory, e.g. an uploaded file.
///
/// `source_name` only labels errors and log events.
pub fn read_csv_bytes(source_name: &str, bytes: Vec<u8>) -> Result<DataFrame> {
    let df = text_read_options()
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;
    tracing::debug!(
        source = source_name,
        rows = df.height(),
        columns = df.width(),
        "csv loaded"
    );
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polars_utils::any_to_text;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_file_keeps_text() {
        let file = create_temp_csv("record_id,phone_number\n0042-B,5125550100\n");
        let df = read_csv_file(file.path()).unwrap();
        assert_eq!(df.height(), 1);
        let value = df.column("record_id").unwrap().get(0).unwrap();
        assert_eq!(any_to_text(value).as_deref(), Some("0042-B"));
        let phone = df.column("phone_number").unwrap().get(0).unwrap();
        assert_eq!(any_to_text(phone).as_deref(), Some("5125550100"));
    }

    #[test]
    fn test_read_csv_file_missing() {
        let err = read_csv_file(Path::new("/no/such/booking.csv")).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }

    #[test]
    fn test_read_csv_bytes() {
        let df = read_csv_bytes("upload.csv", b"a,b\n1,\n2,x\n".to_vec()).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 2);
    }
}
