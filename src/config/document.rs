//! Loading the TOML configuration document.

use crate::error::{OgcError, Result};
use std::path::Path;

/// A parsed configuration file.
#[derive(Debug, Clone)]
pub struct ConfigDocument {
    root: toml::Table,
}

impl ConfigDocument {
    /// Load and parse a TOML configuration file.
    ///
    /// # Returns
    ///
    /// * `Ok(ConfigDocument)` - Parsed document
    /// * `Err(OgcError::ConfigNotFound)` - The file does not exist
    /// * `Err(OgcError::InvalidToml)` - The file is not valid TOML
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(OgcError::ConfigNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| OgcError::io("read config file", path, e))?;

        Self::from_toml(&content)
    }

    /// Parse a configuration document from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let root: toml::Table = content.parse()?;
        Ok(Self { root })
    }

    /// Walk nested tables along `segments`.
    ///
    /// Returns `None` when any segment is missing or is not a table.
    pub fn section(&self, segments: &[&str]) -> Option<&toml::Table> {
        let mut table = &self.root;
        for segment in segments {
            table = table.get(*segment)?.as_table()?;
        }
        Some(table)
    }
}
