//! Command-line arguments for `recon`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use recon_model::MasterDedup;

#[derive(Parser)]
#[command(
    name = "recon",
    version,
    about = "Reconcile daily bookings against the master measurement export",
    long_about = "Reconcile a day's booking export against the master measurement export.\n\n\
                  Writes <date>.xlsx with one row per scheduled booking and, when a consent\n\
                  export is given, Unmatched_<date>.xlsx listing name disagreements."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow names, phone numbers and emails in trace-level logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reconcile one day's exports and write the report workbooks.
    Run(RunArgs),

    /// Show the columns of a booking export and the appointment-time column.
    Inspect(InspectArgs),
}

/// Options shared by every command that reads a booking export.
#[derive(Args)]
pub struct OptionArgs {
    /// TOML file with column names and reconciliation settings.
    #[arg(long = "config", value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Appointment date/time column (default: first column containing "time").
    #[arg(long = "time-column", value_name = "NAME")]
    pub time_column: Option<String>,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Booking export (e.g. Bookings_20240501-0900.csv).
    #[arg(long = "booking", value_name = "CSV")]
    pub booking: PathBuf,

    /// Master measurement export.
    #[arg(long = "master", value_name = "CSV")]
    pub master: PathBuf,

    /// Consent-form export; enables name validation.
    #[arg(long = "consent", value_name = "CSV")]
    pub consent: Option<PathBuf>,

    /// Directory for the report workbooks.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Date token for the output names (default: derived from the booking file name).
    #[arg(long = "date-token", value_name = "TOKEN")]
    pub date_token: Option<String>,

    #[command(flatten)]
    pub options: OptionArgs,

    /// How repeated record ids in the master export are handled.
    #[arg(long = "master-dedup", value_enum)]
    pub master_dedup: Option<MasterDedupArg>,

    /// Reconcile and report without writing the workbooks.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip the report preview table.
    #[arg(long = "no-preview")]
    pub no_preview: bool,

    /// Print a JSON run summary instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Booking export to inspect.
    #[arg(value_name = "CSV")]
    pub booking: PathBuf,

    #[command(flatten)]
    pub options: OptionArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MasterDedupArg {
    KeepFirst,
    KeepAll,
}

impl From<MasterDedupArg> for MasterDedup {
    fn from(value: MasterDedupArg) -> Self {
        match value {
            MasterDedupArg::KeepFirst => Self::KeepFirst,
            MasterDedupArg::KeepAll => Self::KeepAll,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn arguments_are_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_parses_all_flags() {
        let cli = Cli::try_parse_from([
            "recon",
            "run",
            "--booking",
            "Bookings_20240501-0900.csv",
            "--master",
            "master.csv",
            "--consent",
            "consent.csv",
            "--time-column",
            "Slot",
            "--master-dedup",
            "keep-all",
            "--dry-run",
            "--log-data",
        ])
        .unwrap();
        assert!(cli.log_data);
        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert!(args.dry_run);
        assert_eq!(args.options.time_column.as_deref(), Some("Slot"));
        assert!(matches!(args.master_dedup, Some(MasterDedupArg::KeepAll)));
        assert_eq!(args.output_dir, PathBuf::from("."));
    }

    #[test]
    fn run_requires_master() {
        let result = Cli::try_parse_from(["recon", "run", "--booking", "b.csv"]);
        assert!(result.is_err());
    }
}
