//! Project layout conventions.
//!
//! Two layouts exist:
//!
//! - **Flat**: `config.toml` sits at the project root; templates live under
//!   `control/` and outputs under `generated/`.
//! - **Nested**: the generator tree lives in an `ogc/` directory
//!   (`ogc/config.toml`, `ogc/control/`, `ogc/generated/`) and the project
//!   root is the directory above it.
//!
//! User-supplied paths (`template_file`, `additional_files`) are always
//! resolved against the project root.

use crate::error::{OgcError, Result};
use std::path::{Path, PathBuf};

/// Directory that holds the nested generator tree.
pub const NESTED_DIR: &str = "ogc";

/// Output subtree below the generated directory.
pub const OPENCODE_DIR: &str = ".opencode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Flat,
    Nested,
}

impl Layout {
    /// Config path used when the caller does not supply one.
    pub fn default_config_path(&self) -> &'static str {
        match self {
            Layout::Flat => "config.toml",
            Layout::Nested => "ogc/config.toml",
        }
    }

    /// Resolve the project paths for a config file location.
    ///
    /// Relative config paths are made absolute against the current directory.
    pub fn resolve(&self, config_path: &Path) -> Result<ProjectPaths> {
        let absolute = std::path::absolute(config_path)
            .map_err(|e| OgcError::io("resolve config path", config_path, e))?;

        let config_dir = absolute.parent().unwrap_or(Path::new("/")).to_path_buf();
        let root = match self {
            Layout::Flat => config_dir,
            Layout::Nested => config_dir
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or(config_dir),
        };

        Ok(ProjectPaths {
            config_path: absolute,
            root,
            layout: *self,
        })
    }
}

/// Resolved absolute paths for one generator run.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    pub config_path: PathBuf,
    pub root: PathBuf,
    pub layout: Layout,
}

impl ProjectPaths {
    fn tree(&self) -> PathBuf {
        match self.layout {
            Layout::Flat => self.root.clone(),
            Layout::Nested => self.root.join(NESTED_DIR),
        }
    }

    /// A built-in template path such as `control/agents/task-manager.md`.
    pub fn control(&self, relative: &str) -> PathBuf {
        self.tree().join(relative)
    }

    /// An output path below `generated/.opencode/`.
    pub fn output(&self, relative: &str) -> PathBuf {
        self.tree()
            .join("generated")
            .join(OPENCODE_DIR)
            .join(relative)
    }

    /// A user-supplied path; absolute paths are kept as-is.
    pub fn user_path(&self, path: &str) -> PathBuf {
        let candidate = Path::new(path);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.root.join(candidate)
        }
    }
}
