//! Report files: in-memory buffers plus their names.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use recon_model::{DailyReport, ReportTable, UnmatchedNamesReport};

use crate::error::{ReportError, Result};
use crate::naming::{XLSX_MIME, daily_file_name, unmatched_file_name};
use crate::xlsx::table_to_xlsx;

/// A serialized workbook ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ReportFile {
    pub fn xlsx<T: ReportTable + ?Sized>(file_name: String, table: &T) -> Result<Self> {
        let bytes = table_to_xlsx(table)?;
        debug!(
            file_name = %file_name,
            rows = table.row_count(),
            bytes = bytes.len(),
            "workbook serialized"
        );
        Ok(Self {
            file_name,
            mime_type: XLSX_MIME,
            bytes,
        })
    }

    /// Write the buffer to `dir/<file_name>`, creating `dir` if needed.
    ///
    /// An existing file with the same name is overwritten.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir).map_err(|source| ReportError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.bytes).map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

/// Workbooks produced by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedReports {
    pub daily: ReportFile,
    pub unmatched: Option<ReportFile>,
}

impl EmittedReports {
    pub fn files(&self) -> impl Iterator<Item = &ReportFile> {
        std::iter::once(&self.daily).chain(self.unmatched.as_ref())
    }

    /// Persist every workbook into `dir`, returning the written paths.
    pub fn write_all(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        self.files().map(|file| file.write_to(dir)).collect()
    }
}

/// Serialize the daily report and, when present, the unmatched-names table.
pub fn emit_reports(
    report: &DailyReport,
    unmatched: Option<&UnmatchedNamesReport>,
    date_token: &str,
) -> Result<EmittedReports> {
    let daily = ReportFile::xlsx(daily_file_name(date_token), report)?;
    let unmatched = unmatched
        .map(|names| ReportFile::xlsx(unmatched_file_name(date_token), names))
        .transpose()?;
    Ok(EmittedReports { daily, unmatched })
}
