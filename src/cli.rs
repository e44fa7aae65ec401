//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for flashr using the
//! `clap` crate.
//!
//! # Commands
//!
//! - **stats**: Ledger and flashable totals (found, cities started,
//!   cities complete, flashable artworks and cities)
//! - **list**: Cities in view under a mode, with found/declared counts
//! - **show**: One city's artworks in view under a mode
//! - **mark** / **unmark**: Record or remove finds, saving the flash file
//! - **import**: Replace the ledger from another flash file
//! - **export**: Write the ledger as flash-file text
//! - **config**: Inspect or change configuration
//!
//! # Design Features
//!
//! - Global `--quiet` flag for scripting-friendly output
//! - Global path overrides (`--cities`, `--statuses`, `--flash-file`)
//! - Command aliases (e.g., `ls` for `list`, `m` for `mark`)

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., emit_properties=true)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "flashr")]
#[command(about = "A find-state ledger over a mosaic artwork catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Cities descriptor document (overrides config)
    #[arg(long = "cities", value_name = "PATH", global = true)]
    pub cities: Option<PathBuf>,

    /// Status feed document (overrides config)
    #[arg(long = "statuses", value_name = "PATH", global = true)]
    pub statuses: Option<PathBuf>,

    /// Flash file holding the ledger (overrides config)
    #[arg(long = "flash-file", value_name = "PATH", global = true)]
    pub flash_file: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The selected command, defaulting to `stats`
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Stats)
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show ledger totals (default command)
    Stats,

    /// List cities in view under a mode
    #[command(visible_alias = "ls")]
    List {
        /// View mode: all, missing, flashedonly, fullcity, flashable
        #[arg(short = 'm', long = "mode", value_name = "MODE")]
        mode: Option<String>,
    },

    /// Show one city's artworks in view under a mode
    Show {
        /// City prefix, e.g. PA
        city: String,

        /// View mode: all, missing, flashedonly, fullcity, flashable
        #[arg(short = 'm', long = "mode", value_name = "MODE")]
        mode: Option<String>,
    },

    /// Record finds and save the flash file
    #[command(visible_alias = "m")]
    Mark {
        /// Artwork codes to mark as found
        #[arg(value_name = "CODE", required = true, num_args = 1..)]
        codes: Vec<String>,
    },

    /// Remove finds and save the flash file
    #[command(visible_alias = "u")]
    Unmark {
        /// Artwork codes to unmark
        #[arg(value_name = "CODE", required = true, num_args = 1..)]
        codes: Vec<String>,
    },

    /// Replace the ledger from a flash file
    Import {
        /// Path to the flash file to import
        path: PathBuf,
    },

    /// Write the ledger as flash-file text
    Export {
        /// Output file path (prints to stdout if not specified)
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,

        /// Collapse sequential codes into run expressions
        #[arg(long = "compact")]
        compact: bool,

        /// Re-emit properties as comment lines
        #[arg(long = "properties")]
        properties: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_stats() {
        let cli = Cli::try_parse_from(["flashr"]).unwrap();
        assert!(matches!(cli.get_command(), Commands::Stats));
    }

    #[test]
    fn test_list_with_mode() {
        let cli = Cli::try_parse_from(["flashr", "list", "--mode", "missing"]).unwrap();
        match cli.get_command() {
            Commands::List { mode } => assert_eq!(mode.as_deref(), Some("missing")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_mark_requires_codes() {
        assert!(Cli::try_parse_from(["flashr", "mark"]).is_err());
        let cli = Cli::try_parse_from(["flashr", "m", "PA_01", "PA_02"]).unwrap();
        match cli.get_command() {
            Commands::Mark { codes } => assert_eq!(codes, vec!["PA_01", "PA_02"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_overrides() {
        let cli =
            Cli::try_parse_from(["flashr", "--flash-file", "/tmp/ff.txt", "-q", "stats"]).unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.flash_file.as_deref(), Some(std::path::Path::new("/tmp/ff.txt")));
    }
}
