//! Implementation of the `ogc generate` command.

use crate::config::Layout;
use crate::error::{OgcError, Result};
use crate::generator::{Generator, Outcome};
use std::path::PathBuf;

/// Execute the `ogc generate` command.
///
/// A skipped generator is not an error; the reason is printed and the
/// command succeeds.
pub fn cmd_generate(name: &str, config_path: PathBuf, layout: Layout) -> Result<()> {
    let generator = Generator::by_name(name, config_path, layout)?;

    match generator
        .generate()
        .map_err(|e| OgcError::generating(name, e))?
    {
        Outcome::Generated(path) => {
            println!("Generated {} configuration: {}", name, path.display());
        }
        Outcome::Skipped(reason) => {
            println!("Skipped {}: {}", name, reason);
        }
    }

    Ok(())
}
