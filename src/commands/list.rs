//! Implementation of the `ogc list` command.

use crate::error::Result;
use crate::generator::GENERATORS;

/// Execute the `ogc list` command.
pub fn cmd_list() -> Result<()> {
    println!("{:22} {:9} {:44} OUTPUT", "NAME", "KIND", "SECTION");
    for def in GENERATORS {
        println!(
            "{:22} {:9} {:44} {}",
            def.name,
            def.kind.as_str(),
            def.section,
            def.output_path(Some(def.kind.as_str()))
        );
    }
    Ok(())
}
