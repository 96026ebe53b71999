//! Appointment clock-time extraction.

use std::sync::LazyLock;

use regex::Regex;

static CLOCK_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}:\d{2} [AP]M").expect("valid clock-time pattern"));

/// Extract the first `H:MM AM` / `HH:MM PM` clock time from free text.
///
/// # Examples
///
/// ```
/// use recon_transform::extract_appointment_time;
///
/// assert_eq!(
///     extract_appointment_time("2024-05-01, 9:05 AM PDT").as_deref(),
///     Some("9:05 AM")
/// );
/// assert_eq!(extract_appointment_time("2024-05-01"), None);
/// ```
pub fn extract_appointment_time(text: &str) -> Option<String> {
    CLOCK_TIME.find(text).map(|m| m.as_str().to_string())
}

/// Nullable form of [`extract_appointment_time`].
pub fn appointment_time(text: Option<&str>) -> Option<String> {
    text.and_then(extract_appointment_time)
}
