//! Report emission for the daily visit reconciler.
//!
//! - **naming**: date token derivation and output file names
//! - **xlsx**: worksheet serialization of any [`recon_model::ReportTable`]
//! - **emit**: in-memory report files and persistence to an output directory

mod emit;
mod error;
mod naming;
mod xlsx;

pub use emit::{EmittedReports, ReportFile, emit_reports};
pub use error::{ReportError, Result};
pub use naming::{
    UNMATCHED_PREFIX, XLSX_MIME, daily_file_name, date_token_from_filename, unmatched_file_name,
};
pub use xlsx::{SHEET_NAME, table_to_xlsx};
