//! Error types for ogc.
//!
//! Uses thiserror for derive macros. Every failure surfaces through
//! [`OgcError`] and is reported once, at the top level, with exit code 1.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Which template source a missing-file error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Custom,
    Additional,
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileKind::Custom => f.write_str("Custom template file"),
            FileKind::Additional => f.write_str("Additional file"),
        }
    }
}

/// Main error type for ogc operations.
#[derive(Error, Debug)]
pub enum OgcError {
    /// The TOML configuration file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// The configuration file is not valid TOML.
    #[error("Invalid TOML configuration: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// A control key has the wrong type.
    #[error("Invalid {section} configuration: {message}")]
    InvalidConfig { section: String, message: String },

    /// `additional_files_strategy` is neither `merge` nor `replace`.
    #[error("Invalid additional_files_strategy: {0}. Must be 'merge' or 'replace'")]
    InvalidStrategy(String),

    /// `lang` is not in the generator's supported set.
    #[error("Unsupported language: {lang}. Supported languages: {supported}")]
    UnsupportedLanguage { lang: String, supported: String },

    /// `template` is neither `default` nor `custom`.
    #[error("Unknown template type: {0}")]
    UnknownTemplateType(String),

    /// `template = "custom"` without a `template_file`.
    #[error("Custom template specified but template_file is empty")]
    MissingTemplateFile,

    /// No registered generator has this name.
    #[error("Unknown generator '{name}'. Available generators: {available}")]
    UnknownGenerator { name: String, available: String },

    /// A referenced template file does not exist.
    #[error("{kind} not found: {}", .path.display())]
    FileNotFound { kind: FileKind, path: PathBuf },

    /// A custom template exists but has zero length.
    #[error("Custom template file is empty: {}", .0.display())]
    EmptyTemplate(PathBuf),

    /// Nothing resolved to any text.
    #[error(
        "No template content available. Enable include_base_template, set a supported lang, \
         specify a custom template, or provide additional_files."
    )]
    NoTemplateContent,

    /// A single generator failed; wraps the underlying cause.
    #[error("failed to generate {name} configuration: {source}")]
    Generation {
        name: String,
        #[source]
        source: Box<OgcError>,
    },

    /// `ogc all` finished but at least one generator failed.
    #[error("{failed} of {total} generators failed")]
    GeneratorsFailed { failed: usize, total: usize },

    /// Filesystem failure with the path that caused it.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl OgcError {
    /// Build an I/O error with a message naming the offending path.
    pub fn io(action: &str, path: &std::path::Path, source: std::io::Error) -> Self {
        OgcError::Io {
            context: format!("failed to {} '{}'", action, path.display()),
            source,
        }
    }

    /// Attach the generator name to an error.
    pub fn generating(name: &str, source: OgcError) -> Self {
        OgcError::Generation {
            name: name.to_string(),
            source: Box::new(source),
        }
    }

    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        exit_codes::FAILURE
    }
}

/// Result type alias for ogc operations.
pub type Result<T> = std::result::Result<T, OgcError>;
