//! The `list` command - show section names and titles.

use std::io::{self, Write};

use spanscope_tour::SECTIONS;

use crate::common::CliResult;

/// Run the list command.
pub fn run() -> CliResult<()> {
    let mut out = io::stdout().lock();
    for section in &SECTIONS {
        writeln!(out, "{:<12}{}", section.name, section.title)?;
    }
    Ok(())
}
