//! Reconciliation core.
//!
//! - **reconcile**: booking/master join, row-count check, missing-row recovery
//! - **consent**: consent-form name comparison
//! - **pipeline**: ordered execution of all stages for one run

pub mod consent;
pub mod pipeline;
pub mod reconcile;

pub use consent::{NameComparison, compare_names, validate_consent};
pub use pipeline::{DailyInputs, DailyRun, RunStats, run_daily};
pub use reconcile::{
    Reconciliation, join_on_record_id, missing_bookings, reconcile, recover_missing,
};
