//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// labcheck - run static type checks across lab directories.
#[derive(Debug, Parser)]
#[command(name = "labcheck")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project config file (overrides default project.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Minimal output (checker output is still printed)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run type checks (default if no command specified)
    Check(CheckArgs),

    /// Show which directories would be checked and why
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Check only the specified labs (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Skip the specified labs (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,

    /// Print planned invocations without executing
    #[arg(long)]
    pub dry_run: bool,

    /// Type checker program to invoke instead of `python -m mypy`
    #[arg(long, env = "LABCHECK_CHECKER", value_name = "PROGRAM")]
    pub checker: Option<PathBuf>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn check_accepts_comma_separated_lab_lists() {
        let cli = Cli::parse_from(["labcheck", "check", "--only", "lab_5_scrapper,lab_6_pipeline"]);
        match cli.command {
            Some(Commands::Check(args)) => {
                assert_eq!(args.only, ["lab_5_scrapper", "lab_6_pipeline"]);
            }
            other => panic!("expected check command, got {:?}", other),
        }
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["labcheck", "--quiet"]);
        assert!(cli.command.is_none());
        assert!(cli.quiet);
    }
}
