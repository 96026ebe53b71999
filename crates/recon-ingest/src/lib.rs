//! Export ingestion for the daily visit reconciler.
//!
//! Loads the booking, master and consent CSV exports into Polars DataFrames
//! and converts them to typed records, failing early on structural problems
//! such as a missing column.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use recon_ingest::{read_booking, read_master};
//! use recon_model::ReconOptions;
//!
//! let options = ReconOptions::default();
//! let booking = read_booking(Path::new("Bookings_20240501-0900.csv"), &options)?;
//! let master = read_master(Path::new("master.csv"), &options)?;
//! ```

mod columns;
mod csv;
mod error;
mod loaders;
mod polars_utils;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{read_csv_bytes, read_csv_file};

// === Column Lookup ===
pub use columns::{column_names, find_column, normalize_header, resolve_time_column};

// === Typed Records ===
pub use loaders::{
    BookingTable, load_booking, load_consent, load_master, read_booking, read_consent,
    read_master,
};

// === Polars Helpers ===
pub use polars_utils::{any_to_string, any_to_text, column_text};
