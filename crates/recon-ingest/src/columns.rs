//! Column lookup against export headers.

use polars::prelude::DataFrame;

use crate::error::{IngestError, Result};

/// Trim whitespace and a UTF-8 byte-order mark from a header.
pub fn normalize_header(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}').trim()
}

/// Column names of a frame, in source order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}

fn list_columns(headers: &[String]) -> String {
    headers.join(", ")
}

/// Find the actual header matching `wanted` after normalization.
pub fn find_column<'a>(headers: &'a [String], wanted: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|header| normalize_header(header) == wanted)
        .map(String::as_str)
}

/// Like [`find_column`] but a missing column is a structural error.
pub fn require_column<'a>(
    headers: &'a [String],
    table: &'static str,
    wanted: &str,
) -> Result<&'a str> {
    find_column(headers, wanted).ok_or_else(|| IngestError::MissingColumn {
        table,
        column: wanted.to_string(),
        available: list_columns(headers),
    })
}

/// Resolve the booking column carrying the appointment date/time text.
///
/// An explicit column must exist. Without one, the first header containing
/// `hint` (case-insensitive) is used.
pub fn resolve_time_column<'a>(
    headers: &'a [String],
    explicit: Option<&str>,
    hint: &str,
) -> Result<&'a str> {
    if let Some(column) = explicit {
        return require_column(headers, "booking", column);
    }
    let hint_lower = hint.to_lowercase();
    headers
        .iter()
        .find(|header| normalize_header(header).to_lowercase().contains(&hint_lower))
        .map(String::as_str)
        .ok_or_else(|| IngestError::TimeColumnNotFound {
            hint: hint.to_string(),
            available: list_columns(headers),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn time_column_first_match_wins() {
        let cols = headers(&["Status", "Start Date & Time", "End Time"]);
        assert_eq!(
            resolve_time_column(&cols, None, "time").unwrap(),
            "Start Date & Time"
        );
    }

    #[test]
    fn time_column_match_is_case_insensitive() {
        let cols = headers(&["record_id", "APPOINTMENT TIME"]);
        assert_eq!(
            resolve_time_column(&cols, None, "time").unwrap(),
            "APPOINTMENT TIME"
        );
    }

    #[test]
    fn time_column_missing_is_fatal() {
        let cols = headers(&["Status", "record_id"]);
        let err = resolve_time_column(&cols, None, "time").unwrap_err();
        assert!(matches!(err, IngestError::TimeColumnNotFound { .. }));
    }

    #[test]
    fn explicit_time_column_skips_search() {
        let cols = headers(&["Start Time", "Slot"]);
        assert_eq!(resolve_time_column(&cols, Some("Slot"), "time").unwrap(), "Slot");
        let err = resolve_time_column(&cols, Some("When"), "time").unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn { .. }));
    }

    #[test]
    fn headers_match_after_bom_and_whitespace() {
        let cols = headers(&["\u{feff}record_id", " Status "]);
        assert_eq!(find_column(&cols, "record_id"), Some("\u{feff}record_id"));
        assert_eq!(find_column(&cols, "Status"), Some(" Status "));
        assert_eq!(find_column(&cols, "status"), None);
    }
}
