use crate::config::Layout;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway project directory with a config file and templates.
pub(crate) struct TestProject {
    dir: TempDir,
    layout: Layout,
}

impl TestProject {
    pub(crate) fn flat() -> Self {
        Self::new(Layout::Flat)
    }

    pub(crate) fn nested() -> Self {
        Self::new(Layout::Nested)
    }

    fn new(layout: Layout) -> Self {
        Self {
            dir: TempDir::new().unwrap(),
            layout,
        }
    }

    pub(crate) fn layout(&self) -> Layout {
        self.layout
    }

    pub(crate) fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Directory that holds `config.toml`, `control/` and `generated/`.
    pub(crate) fn tree(&self) -> PathBuf {
        match self.layout {
            Layout::Flat => self.root().to_path_buf(),
            Layout::Nested => self.root().join("ogc"),
        }
    }

    pub(crate) fn config_path(&self) -> PathBuf {
        self.tree().join("config.toml")
    }

    pub(crate) fn config(&self, content: &str) -> &Self {
        write(&self.config_path(), content);
        self
    }

    /// Write a built-in template relative to the generator tree.
    pub(crate) fn control(&self, relative: &str, content: &str) -> &Self {
        write(&self.tree().join(relative), content);
        self
    }

    /// Write a user file relative to the project root.
    pub(crate) fn file(&self, relative: &str, content: &str) -> &Self {
        write(&self.root().join(relative), content);
        self
    }

    /// Path below `generated/.opencode/`.
    pub(crate) fn output(&self, relative: &str) -> PathBuf {
        self.tree().join("generated/.opencode").join(relative)
    }

    pub(crate) fn read_output(&self, relative: &str) -> String {
        std::fs::read_to_string(self.output(relative)).unwrap()
    }
}

fn write(path: &Path, content: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}
