//! Reconciliation options from an optional TOML file plus CLI overrides.
//!
//! Every key is optional; a file only needs to name what differs from the
//! standard export layout:
//!
//! ```toml
//! master_dedup = "keep-all"
//!
//! [booking]
//! appointment = "Start Date & Time"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use recon_model::{MasterDedup, ReconOptions};

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionOverrides {
    pub time_column: Option<String>,
    pub master_dedup: Option<MasterDedup>,
}

/// Parse options from TOML text.
pub fn parse_options(text: &str) -> Result<ReconOptions> {
    toml::from_str(text).context("invalid reconciliation config")
}

/// Load options from `path`, or the defaults when no file is given.
///
/// A file that is given but cannot be read or parsed is an error.
pub fn load_options(path: Option<&Path>) -> Result<ReconOptions> {
    let Some(path) = path else {
        return Ok(ReconOptions::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let options = parse_options(&text).with_context(|| format!("load config {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(options)
}

pub fn apply_overrides(mut options: ReconOptions, overrides: &OptionOverrides) -> ReconOptions {
    if let Some(column) = &overrides.time_column {
        options = options.with_time_column(column.clone());
    }
    if let Some(policy) = overrides.master_dedup {
        options = options.with_master_dedup(policy);
    }
    options
}

/// Load the config file and apply command-line overrides on top.
pub fn resolve_options(path: Option<&Path>, overrides: &OptionOverrides) -> Result<ReconOptions> {
    Ok(apply_overrides(load_options(path)?, overrides))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_means_defaults() {
        let options = load_options(None).unwrap();
        assert_eq!(options, ReconOptions::default());
    }

    #[test]
    fn overrides_win_over_file_values() {
        let file = parse_options("master_dedup = \"keep-all\"\n[booking]\nappointment = \"Slot\"\n")
            .unwrap();
        let overrides = OptionOverrides {
            time_column: Some("Start Time".to_string()),
            master_dedup: Some(MasterDedup::KeepFirst),
        };
        let options = apply_overrides(file, &overrides);
        assert_eq!(options.booking.appointment.as_deref(), Some("Start Time"));
        assert_eq!(options.master_dedup, MasterDedup::KeepFirst);
    }

    #[test]
    fn empty_overrides_keep_file_values() {
        let file = parse_options("scheduled_status = \"Confirmed\"\n").unwrap();
        let options = apply_overrides(file, &OptionOverrides::default());
        assert_eq!(options.scheduled_status, "Confirmed");
        assert_eq!(options.record_id_suffix, "-B");
    }
}
