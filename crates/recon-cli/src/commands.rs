use anyhow::Result;
use tracing::info_span;

use recon_cli::config::{OptionOverrides, resolve_options};
use recon_cli::pipeline::{execute, inspect_booking};
use recon_cli::types::{BookingInspection, RunOutput, RunRequest};

use crate::cli::{InspectArgs, OptionArgs, RunArgs};

fn overrides(options: &OptionArgs, args: Option<&RunArgs>) -> OptionOverrides {
    OptionOverrides {
        time_column: options.time_column.clone(),
        master_dedup: args.and_then(|args| args.master_dedup).map(Into::into),
    }
}

pub fn run_reconcile(args: &RunArgs) -> Result<RunOutput> {
    let options = resolve_options(
        args.options.config.as_deref(),
        &overrides(&args.options, Some(args)),
    )?;
    let request = RunRequest {
        booking: args.booking.clone(),
        master: args.master.clone(),
        consent: args.consent.clone(),
        output_dir: args.output_dir.clone(),
        date_token: args.date_token.clone(),
        dry_run: args.dry_run,
    };
    let span = info_span!("run", booking = %args.booking.display());
    let _guard = span.enter();
    execute(&request, &options)
}

pub fn run_inspect(args: &InspectArgs) -> Result<BookingInspection> {
    let options = resolve_options(args.options.config.as_deref(), &overrides(&args.options, None))?;
    inspect_booking(&args.booking, &options)
}
