//! The `tour` command - print the demonstration transcript.

use std::io;

use tracing::debug;

use crate::cli::TourArgs;
use crate::common::CliResult;

/// Run the tour command.
pub fn run(args: &TourArgs) -> CliResult<()> {
    let mut out = io::stdout().lock();
    if args.sections.is_empty() {
        spanscope_tour::run_all(&mut out)
    } else {
        debug!(sections = ?args.sections, "running selected sections");
        spanscope_tour::run_selected(&mut out, &args.sections)
    }
}
