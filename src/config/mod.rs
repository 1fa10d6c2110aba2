//! Configuration model for ogc.
//!
//! This module loads the TOML document, locates a generator's sub-table,
//! and exposes typed control fields and the project layout conventions.
//! Unknown keys in a generator section are not errors: they are pass-through
//! fields destined for the output frontmatter.

mod document;
pub mod layout;
mod section;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use document::ConfigDocument;
pub use layout::{Layout, ProjectPaths};
pub use section::{CONTROL_KEYS, ControlFields, ENABLED_KEY, GeneratorSection, VCS_KEY, is_disabled};
pub use types::{Language, MergeStrategy, TemplateMode, join_languages};
