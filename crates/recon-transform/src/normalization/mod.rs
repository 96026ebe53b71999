//! Field normalization.
//!
//! - **phone**: phone number formatting
//! - **time**: clock-time extraction from appointment text
//! - **record_id**: join-key derivation

pub mod phone;
pub mod record_id;
pub mod time;

pub use phone::{clean_phone_number, normalize_phone};
pub use record_id::suffix_record_id;
pub use time::{appointment_time, extract_appointment_time};
