//! Field normalization and preprocessing.
//!
//! - **normalization**: phone numbers, appointment times and join keys
//! - **booking**: status filter and per-row normalization of the booking export
//! - **master**: key derivation, projection and dedup of the master export
//!
//! All functions here are total: malformed values pass through unchanged or
//! become nulls, they never abort a run.

pub mod booking;
pub mod master;
pub mod normalization;

pub use booking::{BookingStage, filter_scheduled, prepare_booking, preprocess_booking};
pub use master::{MasterStage, preprocess_master};
pub use normalization::{
    appointment_time, clean_phone_number, extract_appointment_time, normalize_phone,
    suffix_record_id,
};
