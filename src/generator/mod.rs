//! Generator runner.
//!
//! A [`Generator`] binds one registry row to a configuration file and runs
//! the shared pipeline: load the document, extract the section, resolve the
//! template, synthesize frontmatter and write the output.

pub mod output;
pub mod registry;


pub use registry::{GENERATORS, GeneratorDef, GeneratorKind, OutputRule, find};

use crate::config::{ConfigDocument, GeneratorSection, Layout, ProjectPaths, is_disabled};
use crate::error::{OgcError, Result};
use crate::template::{apply_defaults, extract_pass_through, resolve_template};
use std::path::PathBuf;
use tracing::debug;

/// Result of running one generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The output file was written.
    Generated(PathBuf),
    /// Nothing was written; the reason is user-facing.
    Skipped(String),
}

/// One generator bound to a configuration file.
#[derive(Debug, Clone)]
pub struct Generator {
    def: &'static GeneratorDef,
    config_path: PathBuf,
    layout: Layout,
}

impl Generator {
    pub fn new(def: &'static GeneratorDef, config_path: impl Into<PathBuf>, layout: Layout) -> Self {
        Self {
            def,
            config_path: config_path.into(),
            layout,
        }
    }

    /// Look up a generator by name.
    ///
    /// # Returns
    ///
    /// * `Ok(Generator)` - The named generator
    /// * `Err(OgcError::UnknownGenerator)` - No generator has this name
    pub fn by_name(name: &str, config_path: impl Into<PathBuf>, layout: Layout) -> Result<Self> {
        let def = find(name).ok_or_else(|| OgcError::UnknownGenerator {
            name: name.to_string(),
            available: registry::available_names(),
        })?;
        Ok(Self::new(def, config_path, layout))
    }

    /// Load the configuration and run the generator.
    pub fn generate(&self) -> Result<Outcome> {
        let paths = self.layout.resolve(&self.config_path)?;
        let doc = ConfigDocument::load(&paths.config_path)?;
        self.generate_with(&doc, &paths)
    }

    /// Run the generator against an already loaded document.
    pub fn generate_with(&self, doc: &ConfigDocument, paths: &ProjectPaths) -> Result<Outcome> {
        let def = self.def;

        let table = match doc.section(&def.section_path()) {
            Some(table) if !table.is_empty() => table,
            _ => {
                return Ok(Outcome::Skipped(format!(
                    "No {} configuration found",
                    def.name
                )));
            }
        };

        if is_disabled(table) {
            return Ok(Outcome::Skipped(format!("{} is disabled", def.name)));
        }

        let section = GeneratorSection::from_table(def.name, table)?;

        if def.requires_git_vcs {
            if let Some(vcs) = unsupported_vcs(section.vcs()) {
                return Ok(Outcome::Skipped(format!(
                    "VCS '{}' is not supported (only 'git' is supported)",
                    vcs
                )));
            }
        }

        let include_base = section
            .control
            .include_base_template
            .unwrap_or(def.include_base_default);
        debug!(
            generator = def.name,
            include_base,
            lang = %section.control.lang,
            template = %section.control.template,
            "resolving template"
        );
        let body = resolve_template(&def.sources(), &section.control, include_base, paths)?;

        let mut fields = extract_pass_through(&section.table, &def.control_keys());
        if let Some(defaults) = def.defaults {
            fields = apply_defaults(
                fields,
                &[
                    ("description", format!("{} command", def.title())),
                    ("agent", defaults.agent.to_string()),
                    ("model", defaults.model.to_string()),
                ],
            );
        }

        let path = paths.output(def.output_path(section.mode()));
        output::write_document(&path, &fields, &body)?;

        Ok(Outcome::Generated(path))
    }
}

/// The configured VCS when it is anything other than git; absent means git.
fn unsupported_vcs(vcs: Option<&toml::Value>) -> Option<String> {
    match vcs {
        None => None,
        Some(toml::Value::String(s)) if s == "git" => None,
        Some(toml::Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}
