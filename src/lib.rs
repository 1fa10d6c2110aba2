//! ogc: generate OpenCode agent and command definitions from TOML.
//!
//! Every agent and command is produced by the same pipeline:
//!
//! 1. Load the TOML configuration and look up the generator's section
//! 2. Resolve the Markdown body from base, language, custom and additional
//!    templates ([`template::resolve_template`])
//! 3. Strip any frontmatter the templates carried and synthesize a new one
//!    from the section's pass-through fields
//! 4. Write the result atomically below `generated/.opencode/`
//!
//! Generators differ only in their row of [`generator::GENERATORS`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod generator;
pub mod template;

#[cfg(test)]
pub(crate) mod test_support;
