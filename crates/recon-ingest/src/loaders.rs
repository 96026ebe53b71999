//! Typed record extraction from loaded exports.
//!
//! Column presence is validated here, once, so later stages work on typed
//! records and never look columns up by name.

use std::path::Path;

use polars::prelude::DataFrame;
use tracing::{debug, warn};

use recon_model::{
    BookingRecord, CellValue, ConsentRecord, MasterRecord, Measurements, ReconOptions,
};

use crate::columns::{column_names, require_column, resolve_time_column};
use crate::csv::read_csv_file;
use crate::error::Result;
use crate::polars_utils::column_text;

/// The booking export after validation.
#[derive(Debug, Clone)]
pub struct BookingTable {
    /// All columns present in the export, in source order.
    pub columns: Vec<String>,
    /// The column the appointment text was read from.
    pub time_column: String,
    pub records: Vec<BookingRecord>,
}

impl BookingTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn text_of(
    df: &DataFrame,
    headers: &[String],
    table: &'static str,
    wanted: &str,
) -> Result<Vec<Option<String>>> {
    let actual = require_column(headers, table, wanted)?;
    column_text(df, actual)
}

fn measurement_values(
    df: &DataFrame,
    headers: &[String],
    wanted: &str,
) -> Result<Vec<Option<CellValue>>> {
    let values = text_of(df, headers, "master", wanted)?;
    Ok(values
        .iter()
        .map(|value| value.as_deref().and_then(CellValue::parse))
        .collect())
}

fn record_ids(
    df: &DataFrame,
    headers: &[String],
    table: &'static str,
    wanted: &str,
) -> Result<Vec<String>> {
    let values = text_of(df, headers, table, wanted)?;
    let missing = values.iter().filter(|value| value.is_none()).count();
    if missing > 0 {
        warn!(table, missing, "rows without a record id");
    }
    Ok(values.into_iter().map(Option::unwrap_or_default).collect())
}

/// Build booking records, resolving the appointment-time column.
pub fn load_booking(df: &DataFrame, options: &ReconOptions) -> Result<BookingTable> {
    let headers = column_names(df);
    debug!(columns = ?headers, "booking columns");
    let cols = &options.booking;
    let time_column = resolve_time_column(
        &headers,
        cols.appointment.as_deref(),
        &options.time_column_hint,
    )?
    .to_string();

    let record_id = record_ids(df, &headers, "booking", &cols.record_id)?;
    let mut status = text_of(df, &headers, "booking", &cols.status)?.into_iter();
    let mut appointment = column_text(df, &time_column)?.into_iter();
    let mut phone = text_of(df, &headers, "booking", &cols.phone_number)?.into_iter();
    let mut first = text_of(df, &headers, "booking", &cols.first_name)?.into_iter();
    let mut last = text_of(df, &headers, "booking", &cols.last_name)?.into_iter();
    let mut email = text_of(df, &headers, "booking", &cols.customer_email)?.into_iter();

    let records = record_id
        .into_iter()
        .map(|record_id| BookingRecord {
            record_id,
            status: status.next().flatten(),
            appointment: appointment.next().flatten(),
            phone_number: phone.next().flatten(),
            first_name: first.next().flatten(),
            last_name: last.next().flatten(),
            customer_email: email.next().flatten(),
        })
        .collect();

    debug!(time_column = %time_column, "appointment time column resolved");
    Ok(BookingTable {
        columns: headers,
        time_column,
        records,
    })
}

/// Build master records; measurement text is classified into cell values.
pub fn load_master(df: &DataFrame, options: &ReconOptions) -> Result<Vec<MasterRecord>> {
    let headers = column_names(df);
    let cols = &options.master;
    let record_id = record_ids(df, &headers, "master", &cols.record_id)?;
    let [skin, sternal, waist, arm] = cols.measurement_columns();
    let mut skin = measurement_values(df, &headers, skin)?.into_iter();
    let mut sternal = measurement_values(df, &headers, sternal)?.into_iter();
    let mut waist = measurement_values(df, &headers, waist)?.into_iter();
    let mut arm = measurement_values(df, &headers, arm)?.into_iter();

    Ok(record_id
        .into_iter()
        .map(|record_id| MasterRecord {
            record_id,
            measurements: Measurements {
                skin: skin.next().flatten(),
                sternal: sternal.next().flatten(),
                waist_circ: waist.next().flatten(),
                arm: arm.next().flatten(),
            },
        })
        .collect())
}

/// Build consent records.
pub fn load_consent(df: &DataFrame, options: &ReconOptions) -> Result<Vec<ConsentRecord>> {
    let headers = column_names(df);
    let cols = &options.consent;
    let record_id = record_ids(df, &headers, "consent", &cols.record_id)?;
    let mut first = text_of(df, &headers, "consent", &cols.first_name)?.into_iter();
    let mut last = text_of(df, &headers, "consent", &cols.last_name)?.into_iter();
    Ok(record_id
        .into_iter()
        .map(|record_id| ConsentRecord {
            record_id,
            first_name: first.next().flatten(),
            last_name: last.next().flatten(),
        })
        .collect())
}

/// Read and validate a booking export from disk.
pub fn read_booking(path: &Path, options: &ReconOptions) -> Result<BookingTable> {
    load_booking(&read_csv_file(path)?, options)
}

/// Read and validate a master export from disk.
pub fn read_master(path: &Path, options: &ReconOptions) -> Result<Vec<MasterRecord>> {
    load_master(&read_csv_file(path)?, options)
}

/// Read and validate a consent export from disk.
pub fn read_consent(path: &Path, options: &ReconOptions) -> Result<Vec<ConsentRecord>> {
    load_consent(&read_csv_file(path)?, options)
}
