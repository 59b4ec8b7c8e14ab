//! Error handling utilities for the CLI.

use nu_ansi_term::Color;
use spanscope_tour::TourError;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, TourError>;

/// Format an error as a single `error: ...` line.
pub fn render(error: &TourError, no_color: bool) -> String {
    if no_color {
        format!("error: {error}")
    } else {
        format!("{}: {error}", Color::Red.bold().paint("error"))
    }
}

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: TourError, no_color: bool) -> ! {
    eprintln!("{}", render(&error, no_color));
    std::process::exit(1);
}
