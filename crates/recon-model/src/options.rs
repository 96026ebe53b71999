//! Configuration options for reconciliation.
//!
//! Every field has a default matching the standard export layout, so a config
//! file only needs to name what differs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status value a booking must carry to be included.
pub const DEFAULT_SCHEDULED_STATUS: &str = "Scheduled";

/// Suffix appended to master and consent identifiers to form the join key.
pub const DEFAULT_RECORD_ID_SUFFIX: &str = "-B";

/// Case-insensitive substring used to locate the appointment-time column.
pub const DEFAULT_TIME_COLUMN_HINT: &str = "time";

/// How the master preprocessor treats repeated join keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MasterDedup {
    /// Keep the first master row for each key.
    #[default]
    KeepFirst,
    /// Keep every row; the join fans out on repeated keys.
    KeepAll,
}

impl MasterDedup {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::KeepFirst => "keep-first",
            Self::KeepAll => "keep-all",
        }
    }
}

impl fmt::Display for MasterDedup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Column names in the booking export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingColumns {
    pub status: String,
    /// Explicit appointment date/time column. When unset, the first column
    /// whose name contains the time hint is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment: Option<String>,
    pub phone_number: String,
    pub record_id: String,
    pub first_name: String,
    pub last_name: String,
    pub customer_email: String,
}

impl Default for BookingColumns {
    fn default() -> Self {
        Self {
            status: "Status".to_string(),
            appointment: None,
            phone_number: "phone_number".to_string(),
            record_id: "record_id".to_string(),
            first_name: "first_name".to_string(),
            last_name: "last_name".to_string(),
            customer_email: "Customer email".to_string(),
        }
    }
}

/// Column names in the master export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MasterColumns {
    pub record_id: String,
    pub skin: String,
    pub sternal: String,
    pub waist_circ: String,
    pub arm: String,
}

impl MasterColumns {
    /// Measurement column names in report order.
    pub fn measurement_columns(&self) -> [&str; 4] {
        [&self.skin, &self.sternal, &self.waist_circ, &self.arm]
    }
}

impl Default for MasterColumns {
    fn default() -> Self {
        Self {
            record_id: "record_id".to_string(),
            skin: "phy_skin".to_string(),
            sternal: "phy_sternal".to_string(),
            waist_circ: "phy_waist_circ".to_string(),
            arm: "phy_arm".to_string(),
        }
    }
}

/// Column names in the consent-form export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsentColumns {
    pub record_id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Default for ConsentColumns {
    fn default() -> Self {
        Self {
            record_id: "record_id".to_string(),
            first_name: "icf_first_name".to_string(),
            last_name: "icf_last_name".to_string(),
        }
    }
}

/// Options controlling a reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconOptions {
    /// Exact, case-sensitive status a booking must carry.
    pub scheduled_status: String,
    pub record_id_suffix: String,
    pub time_column_hint: String,
    pub master_dedup: MasterDedup,
    pub booking: BookingColumns,
    pub master: MasterColumns,
    pub consent: ConsentColumns,
}

impl Default for ReconOptions {
    fn default() -> Self {
        Self {
            scheduled_status: DEFAULT_SCHEDULED_STATUS.to_string(),
            record_id_suffix: DEFAULT_RECORD_ID_SUFFIX.to_string(),
            time_column_hint: DEFAULT_TIME_COLUMN_HINT.to_string(),
            master_dedup: MasterDedup::default(),
            booking: BookingColumns::default(),
            master: MasterColumns::default(),
            consent: ConsentColumns::default(),
        }
    }
}

impl ReconOptions {
    #[must_use]
    pub fn with_time_column(mut self, column: impl Into<String>) -> Self {
        self.booking.appointment = Some(column.into());
        self
    }

    #[must_use]
    pub fn with_master_dedup(mut self, policy: MasterDedup) -> Self {
        self.master_dedup = policy;
        self
    }

    /// Daily report headers, in output order.
    pub fn report_headers(&self) -> Vec<String> {
        let mut headers = vec![
            "appointment_time".to_string(),
            self.booking.record_id.clone(),
            self.booking.first_name.clone(),
            self.booking.last_name.clone(),
            self.booking.customer_email.clone(),
            self.booking.phone_number.clone(),
        ];
        headers.extend(
            self.master
                .measurement_columns()
                .into_iter()
                .map(str::to_string),
        );
        headers
    }

    /// Unmatched-names report headers, in output order.
    pub fn unmatched_headers(&self) -> Vec<String> {
        vec![
            self.consent.record_id.clone(),
            self.consent.first_name.clone(),
            self.consent.last_name.clone(),
            self.booking.first_name.clone(),
            self.booking.last_name.clone(),
        ]
    }
}
