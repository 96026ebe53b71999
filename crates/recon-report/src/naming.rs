//! Date token and output file names.

use std::path::Path;

use crate::error::{ReportError, Result};

/// MIME type of an xlsx workbook.
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Prefix of the unmatched-names workbook.
pub const UNMATCHED_PREFIX: &str = "Unmatched_";

/// Derive the run date token from a booking export file name.
///
/// The token is the part of the second `_`-separated segment before its
/// first `-`, so `Bookings_20240501-0900.csv` yields `20240501`. Only the
/// final path component is considered.
pub fn date_token_from_filename(path: &Path) -> Result<String> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let token = file_name
        .split('_')
        .nth(1)
        .and_then(|segment| segment.split('-').next())
        .filter(|token| !token.is_empty());
    match token {
        Some(token) => Ok(token.to_string()),
        None => Err(ReportError::DateToken { file_name }),
    }
}

pub fn daily_file_name(token: &str) -> String {
    format!("{token}.xlsx")
}

pub fn unmatched_file_name(token: &str) -> String {
    format!("{UNMATCHED_PREFIX}{token}.xlsx")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(name: &str) -> Option<String> {
        date_token_from_filename(Path::new(name)).ok()
    }

    #[test]
    fn takes_second_segment_before_dash() {
        assert_eq!(token("Bookings_20240501-0900.csv").as_deref(), Some("20240501"));
        assert_eq!(token("exports/Bookings_0501_extra.csv").as_deref(), Some("0501"));
    }

    #[test]
    fn segment_without_dash_keeps_extension() {
        // Matches the file-name rule literally: nothing strips the extension.
        assert_eq!(token("Bookings_20240501.csv").as_deref(), Some("20240501.csv"));
    }

    #[test]
    fn missing_segment_is_an_error() {
        assert!(token("bookings.csv").is_none());
        assert!(token("Bookings_-0900.csv").is_none());
        let err = date_token_from_filename(Path::new("bookings.csv")).unwrap_err();
        assert!(err.to_string().contains("bookings.csv"));
    }

    #[test]
    fn output_names() {
        assert_eq!(daily_file_name("20240501"), "20240501.xlsx");
        assert_eq!(unmatched_file_name("20240501"), "Unmatched_20240501.xlsx");
    }
}
