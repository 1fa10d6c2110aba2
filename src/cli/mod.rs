//! CLI argument parsing for ogc.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::Layout;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ogc: generate OpenCode agent and command definitions from TOML.
///
/// Each generator reads one section of the configuration file, merges its
/// Markdown templates and writes a file with YAML frontmatter under
/// `generated/.opencode/`.
#[derive(Parser, Debug)]
#[command(name = "ogc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use the nested layout: `ogc/config.toml` below the project root.
    #[arg(long, global = true)]
    pub nested: bool,

    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for ogc.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a single generator.
    ///
    /// Writes the output file, or reports why the generator was skipped.
    Generate(GenerateArgs),

    /// Run every generator in registry order.
    ///
    /// Keeps going after a failure and prints a summary at the end.
    All(AllArgs),

    /// List the available generators.
    List,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Generator name (see `ogc list`).
    pub name: String,

    /// Configuration file [default: config.toml, or ogc/config.toml with --nested].
    pub config: Option<PathBuf>,
}

/// Arguments for the `all` command.
#[derive(Parser, Debug)]
pub struct AllArgs {
    /// Configuration file [default: config.toml, or ogc/config.toml with --nested].
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    pub fn layout(&self) -> Layout {
        if self.nested {
            Layout::Nested
        } else {
            Layout::Flat
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_minimal() {
        let cli = Cli::try_parse_from(["ogc", "generate", "tester"]).unwrap();
        assert_eq!(cli.layout(), Layout::Flat);
        assert!(!cli.verbose);
        if let Command::Generate(args) = cli.command {
            assert_eq!(args.name, "tester");
            assert!(args.config.is_none());
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_parse_generate_with_config() {
        let cli = Cli::try_parse_from(["ogc", "generate", "clean", "conf/ogc.toml"]).unwrap();
        if let Command::Generate(args) = cli.command {
            assert_eq!(args.name, "clean");
            assert_eq!(args.config, Some(PathBuf::from("conf/ogc.toml")));
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["ogc", "all", "--nested", "-v"]).unwrap();
        assert_eq!(cli.layout(), Layout::Nested);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::All(AllArgs { config: None })));
    }

    #[test]
    fn test_parse_global_flags_before_subcommand() {
        let cli = Cli::try_parse_from(["ogc", "--verbose", "list"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::List));
    }

    #[test]
    fn test_generate_requires_name() {
        assert!(Cli::try_parse_from(["ogc", "generate"]).is_err());
    }

    #[test]
    fn test_unknown_subcommand_fails() {
        assert!(Cli::try_parse_from(["ogc", "deploy"]).is_err());
    }
}
