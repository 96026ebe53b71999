//! Consent-form name validation.

use std::collections::HashMap;

use tracing::{debug, info};

use recon_model::{
    ConsentOutcome, ConsentRecord, DailyReport, ReconOptions, ReportRow, UnmatchedName,
    UnmatchedNamesReport,
};
use recon_transform::suffix_record_id;

/// Rows compared by the consent inner join and those that disagreed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameComparison {
    pub compared: usize,
    pub unmatched: Vec<UnmatchedName>,
}

/// Names match only when both fields are present and byte-for-byte identical.
///
/// A missing name never matches, not even another missing name.
fn names_match(consent: &ConsentRecord, row: &ReportRow) -> bool {
    fn same(left: Option<&str>, right: Option<&str>) -> bool {
        matches!((left, right), (Some(left), Some(right)) if left == right)
    }
    same(consent.first_name.as_deref(), row.first_name.as_deref())
        && same(consent.last_name.as_deref(), row.last_name.as_deref())
}

/// Inner-join consent rows with report rows on the suffixed record id and
/// collect every pair whose first or last name differs.
///
/// Consent rows without a report counterpart are ignored.
pub fn compare_names(
    consent: &[ConsentRecord],
    report: &DailyReport,
    suffix: &str,
) -> NameComparison {
    let mut index: HashMap<&str, Vec<&ReportRow>> = HashMap::with_capacity(report.len());
    for row in &report.rows {
        index.entry(row.record_id.as_str()).or_default().push(row);
    }

    let mut comparison = NameComparison::default();
    for record in consent {
        let record_id = suffix_record_id(&record.record_id, suffix);
        let Some(rows) = index.get(record_id.as_str()) else {
            continue;
        };
        for row in rows {
            comparison.compared += 1;
            if names_match(record, row) {
                continue;
            }
            comparison.unmatched.push(UnmatchedName {
                record_id: record_id.clone(),
                consent_first_name: record.first_name.clone(),
                consent_last_name: record.last_name.clone(),
                first_name: row.first_name.clone(),
                last_name: row.last_name.clone(),
            });
        }
    }
    comparison
}

/// Validate consent-form names against the daily report.
///
/// `None` means no consent export was supplied, which is reported separately
/// from a supplied export whose names all match.
pub fn validate_consent(
    consent: Option<&[ConsentRecord]>,
    report: &DailyReport,
    options: &ReconOptions,
) -> ConsentOutcome {
    let Some(consent) = consent else {
        debug!("no consent export supplied");
        return ConsentOutcome::Skipped;
    };
    let NameComparison {
        compared,
        unmatched,
    } = compare_names(consent, report, &options.record_id_suffix);
    info!(
        consent_rows = consent.len(),
        compared,
        unmatched = unmatched.len(),
        "consent names compared"
    );
    if unmatched.is_empty() {
        ConsentOutcome::AllMatched { compared }
    } else {
        ConsentOutcome::Unmatched {
            compared,
            report: UnmatchedNamesReport {
                headers: options.unmatched_headers(),
                rows: unmatched,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_row(record_id: &str, first: &str, last: &str) -> ReportRow {
        ReportRow {
            record_id: record_id.to_string(),
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            ..ReportRow::default()
        }
    }

    fn consent(record_id: &str, first: Option<&str>, last: Option<&str>) -> ConsentRecord {
        ConsentRecord {
            record_id: record_id.to_string(),
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
        }
    }

    fn report(rows: Vec<ReportRow>) -> DailyReport {
        DailyReport {
            headers: ReconOptions::default().report_headers(),
            rows,
        }
    }

    #[test]
    fn missing_on_one_side_is_a_mismatch() {
        let daily = report(vec![report_row("1-B", "Ada", "Lovelace")]);
        let result = compare_names(&[consent("1", None, Some("Lovelace"))], &daily, "-B");
        assert_eq!(result.compared, 1);
        assert_eq!(result.unmatched.len(), 1);
    }

    #[test]
    fn missing_on_both_sides_is_a_mismatch() {
        let daily = report(vec![ReportRow {
            record_id: "1-B".to_string(),
            last_name: Some("Lovelace".to_string()),
            ..ReportRow::default()
        }]);
        let result = compare_names(&[consent("1", None, Some("Lovelace"))], &daily, "-B");
        assert_eq!(result.compared, 1);
        assert_eq!(result.unmatched.len(), 1);
        assert_eq!(result.unmatched[0].first_name, None);
        assert_eq!(result.unmatched[0].consent_first_name, None);
    }

    #[test]
    fn present_identical_names_match() {
        let daily = report(vec![report_row("1-B", "Ada", "Lovelace")]);
        let result = compare_names(&[consent("1", Some("Ada"), Some("Lovelace"))], &daily, "-B");
        assert_eq!(result.compared, 1);
        assert!(result.unmatched.is_empty());
    }

    #[test]
    fn unmatched_rows_carry_both_spellings() {
        let daily = report(vec![report_row("1-B", "Ada", "Lovelace")]);
        let result = compare_names(
            &[consent("1", Some("Ada"), Some("Lovelace "))],
            &daily,
            "-B",
        );
        let row = &result.unmatched[0];
        assert_eq!(row.record_id, "1-B");
        assert_eq!(row.consent_last_name.as_deref(), Some("Lovelace "));
        assert_eq!(row.last_name.as_deref(), Some("Lovelace"));
    }
}
