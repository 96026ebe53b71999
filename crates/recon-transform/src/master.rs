//! Master preprocessing: join-key derivation, projection and dedup.

use std::collections::HashSet;

use tracing::{debug, warn};

use recon_model::{MasterDedup, MasterEntry, MasterRecord, ReconOptions};

use crate::normalization::suffix_record_id;

/// Output of master preprocessing.
#[derive(Debug, Clone, Default)]
pub struct MasterStage {
    pub entries: Vec<MasterEntry>,
    /// Rows whose key repeated an earlier row. Dropped under
    /// [`MasterDedup::KeepFirst`], retained under [`MasterDedup::KeepAll`].
    pub duplicate_rows: usize,
}

/// Suffix identifiers and project to key plus measurements.
pub fn preprocess_master(records: &[MasterRecord], options: &ReconOptions) -> MasterStage {
    let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
    let mut entries = Vec::with_capacity(records.len());
    let mut duplicate_rows = 0usize;
    for record in records {
        let record_id = suffix_record_id(&record.record_id, &options.record_id_suffix);
        if !seen.insert(record_id.clone()) {
            duplicate_rows += 1;
            if options.master_dedup == MasterDedup::KeepFirst {
                continue;
            }
        }
        entries.push(MasterEntry {
            record_id,
            measurements: record.measurements.clone(),
        });
    }
    if duplicate_rows > 0 {
        warn!(
            duplicate_rows,
            policy = %options.master_dedup,
            "master export repeats record ids"
        );
    }
    debug!(
        input_rows = records.len(),
        entries = entries.len(),
        "master preprocessed"
    );
    MasterStage {
        entries,
        duplicate_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recon_model::{CellValue, Measurements};

    fn master(record_id: &str, skin: f64) -> MasterRecord {
        MasterRecord {
            record_id: record_id.to_string(),
            measurements: Measurements {
                skin: Some(CellValue::Number(skin)),
                ..Measurements::default()
            },
        }
    }

    #[test]
    fn keys_are_suffixed() {
        let stage = preprocess_master(&[master("101", 1.0)], &ReconOptions::default());
        assert_eq!(stage.entries[0].record_id, "101-B");
        assert_eq!(stage.duplicate_rows, 0);
    }

    #[test]
    fn keep_first_drops_later_duplicates() {
        let records = [master("101", 1.0), master("102", 2.0), master("101", 3.0)];
        let stage = preprocess_master(&records, &ReconOptions::default());
        assert_eq!(stage.entries.len(), 2);
        assert_eq!(stage.duplicate_rows, 1);
        assert_eq!(
            stage.entries[0].measurements.skin,
            Some(CellValue::Number(1.0))
        );
    }

    #[test]
    fn keep_all_retains_duplicates() {
        let records = [master("101", 1.0), master("101", 3.0)];
        let options = ReconOptions::default().with_master_dedup(MasterDedup::KeepAll);
        let stage = preprocess_master(&records, &options);
        assert_eq!(stage.entries.len(), 2);
        assert_eq!(stage.duplicate_rows, 1);
    }
}
