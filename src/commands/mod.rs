//! Command implementations for ogc.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod all;
mod generate;
mod list;

use crate::cli::{Cli, Command};
use crate::config::Layout;
use crate::error::Result;
use std::path::PathBuf;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let layout = cli.layout();
    match cli.command {
        Command::Generate(args) => {
            generate::cmd_generate(&args.name, config_path(args.config, layout), layout)
        }
        Command::All(args) => all::cmd_all(config_path(args.config, layout), layout),
        Command::List => list::cmd_list(),
    }
}

/// The caller's config path, or the layout's default.
fn config_path(explicit: Option<PathBuf>, layout: Layout) -> PathBuf {
    explicit.unwrap_or_else(|| PathBuf::from(layout.default_config_path()))
}
