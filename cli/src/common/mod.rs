//! Common utilities shared across CLI commands.

pub mod error;

pub use error::CliResult;
