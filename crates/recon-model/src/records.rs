//! Source and intermediate records.
//!
//! Source records are produced by ingestion with text cells kept exactly as
//! exported (`None` for empty cells). Intermediate records are produced by the
//! preprocessors and consumed by the reconciler.

use serde::{Deserialize, Serialize};

use crate::value::CellValue;

/// One row of the booking export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    /// Booking identifier, already carrying the record id suffix.
    pub record_id: String,
    pub status: Option<String>,
    /// Free-text appointment date/time from the resolved time column.
    pub appointment: Option<String>,
    pub phone_number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub customer_email: Option<String>,
}

/// The four physiological measurements taken from the master export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub skin: Option<CellValue>,
    pub sternal: Option<CellValue>,
    pub waist_circ: Option<CellValue>,
    pub arm: Option<CellValue>,
}

impl Measurements {
    /// Values in report column order.
    pub fn values(&self) -> [Option<&CellValue>; 4] {
        [
            self.skin.as_ref(),
            self.sternal.as_ref(),
            self.waist_circ.as_ref(),
            self.arm.as_ref(),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.values().iter().all(Option::is_none)
    }
}

/// One row of the master participant export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MasterRecord {
    /// Identifier as exported, without the suffix.
    pub record_id: String,
    pub measurements: Measurements,
}

/// One row of the consent-form export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsentRecord {
    /// Identifier as exported, without the suffix.
    pub record_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// A booking row after status filtering and field normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduledBooking {
    pub appointment_time: Option<String>,
    pub record_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub customer_email: Option<String>,
    pub phone_number: Option<String>,
}

/// A master row projected to the join key and measurements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MasterEntry {
    /// Suffixed join key.
    pub record_id: String,
    pub measurements: Measurements,
}
