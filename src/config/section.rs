//! One generator's sub-table of the TOML document.
//!
//! The raw table is kept alongside a typed view of its control keys: the
//! typed view drives template resolution, the raw table (in document order)
//! feeds the frontmatter pass-through.

use super::types::{default_strategy, default_template, default_true};
use crate::error::{OgcError, Result};
use serde::Deserialize;

/// Keys consumed by the generator itself and never echoed into frontmatter.
pub const CONTROL_KEYS: &[&str] = &[
    "enabled",
    "template",
    "template_file",
    "additional_files",
    "additional_files_strategy",
    "include_base_template",
    "lang",
];

/// Extra control key for generators that are tied to a version control system.
///
/// Not part of [`ControlFields`]: for every other generator `vcs` is an
/// ordinary pass-through field of any type.
pub const VCS_KEY: &str = "vcs";

/// Key of the enabled gate, read before the control fields are typed.
pub const ENABLED_KEY: &str = "enabled";

/// Typed control fields of a generator section.
///
/// Enum-like values stay strings here; they are validated during template
/// resolution so that the validation order is explicit.
#[derive(Debug, Clone, Deserialize)]
pub struct ControlFields {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_template")]
    pub template: String,

    #[serde(default)]
    pub template_file: String,

    #[serde(default)]
    pub lang: String,

    /// Falls back to the generator's own default when absent.
    #[serde(default)]
    pub include_base_template: Option<bool>,

    #[serde(default)]
    pub additional_files: Vec<String>,

    #[serde(default = "default_strategy")]
    pub additional_files_strategy: String,
}

impl Default for ControlFields {
    fn default() -> Self {
        Self {
            enabled: true,
            template: default_template(),
            template_file: String::new(),
            lang: String::new(),
            include_base_template: None,
            additional_files: Vec::new(),
            additional_files_strategy: default_strategy(),
        }
    }
}

/// Whether a raw section is switched off.
///
/// Only an explicit `enabled = false` disables a section; the check does not
/// depend on any other control key being well-typed.
pub fn is_disabled(table: &toml::Table) -> bool {
    table.get(ENABLED_KEY).and_then(toml::Value::as_bool) == Some(false)
}

/// A generator section: the raw table plus its parsed control fields.
#[derive(Debug, Clone)]
pub struct GeneratorSection {
    pub table: toml::Table,
    pub control: ControlFields,
}

impl GeneratorSection {
    /// Parse the control fields of `table`.
    ///
    /// `name` only labels the error when a control key has the wrong type.
    pub fn from_table(name: &str, table: &toml::Table) -> Result<Self> {
        let control: ControlFields = toml::Value::Table(table.clone())
            .try_into()
            .map_err(|e: toml::de::Error| OgcError::InvalidConfig {
                section: name.to_string(),
                message: e.to_string().trim().to_string(),
            })?;

        Ok(Self {
            table: table.clone(),
            control,
        })
    }

    /// Raw `vcs` value, if the section sets one.
    pub fn vcs(&self) -> Option<&toml::Value> {
        self.table.get(VCS_KEY)
    }

    /// Agent mode as written in the section, if any (`primary`, `subagent`, ...).
    pub fn mode(&self) -> Option<&str> {
        self.table.get("mode").and_then(toml::Value::as_str)
    }
}
