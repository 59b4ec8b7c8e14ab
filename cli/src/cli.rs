//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// spanscope - walk through spans with static and dynamic extent
#[derive(Parser, Debug)]
#[command(name = "spanscope", version, about, long_about = None)]
pub struct Cli {
    /// Defaults to `tour` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the demonstration transcript
    Tour(TourArgs),

    /// List the available sections
    List,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Tour(TourArgs::default())
    }
}

/// Arguments for the `tour` command.
#[derive(Args, Debug, Default)]
pub struct TourArgs {
    /// Only run the named section (repeatable, kept in the given order)
    #[arg(short, long = "section", value_name = "NAME")]
    pub sections: Vec<String>,
}

/// Arguments for the `completions` command.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_full_tour() {
        let cli = Cli::try_parse_from(["spanscope"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(
            cli.command.unwrap_or_default(),
            Command::Tour(TourArgs { sections }) if sections.is_empty()
        ));
    }

    #[test]
    fn repeated_sections_keep_order() {
        let cli = Cli::try_parse_from(["spanscope", "tour", "-s", "size", "--section", "front"])
            .unwrap();
        let Some(Command::Tour(args)) = cli.command else {
            panic!("expected tour");
        };
        assert_eq!(args.sections, ["size", "front"]);
    }

    #[test]
    fn no_color_is_global() {
        let cli = Cli::try_parse_from(["spanscope", "list", "--no-color"]).unwrap();
        assert!(cli.no_color);
    }
}
