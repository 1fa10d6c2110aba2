//! Atomic file writes.
//!
//! All writes follow the same pattern:
//! 1. Write content to `.{filename}.tmp` in the target's directory
//! 2. Sync the file to disk (fsync)
//! 3. Rename it over the target
//!
//! `std::fs::rename` replaces an existing destination on every supported
//! platform. Source and destination share a directory, so the rename never
//! crosses filesystems. On crash, the temporary file may remain.

use crate::error::{OgcError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a string to a file, creating parent directories.
///
/// # Example
///
/// ```no_run
/// use ogc::fs::atomic_write_file;
/// use std::path::Path;
///
/// atomic_write_file(Path::new("generated/.opencode/command/test.md"), "---\n---\n\nBody")?;
/// # Ok::<(), ogc::error::OgcError>(())
/// ```
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| OgcError::io("create directory", parent, e))?;
    }

    let temp_path = temp_path(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        OgcError::io("replace", path, e)
    })?;

    // Persist the directory entry; opening a directory fails on Windows.
    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

/// Temporary file path next to the target.
fn temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target.file_name().and_then(|n| n.to_str()).ok_or_else(|| {
        OgcError::io(
            "write",
            target,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid file name"),
        )
    })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| OgcError::io("create temporary file", path, e))?;

    let written = file.write_all(content).and_then(|()| file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(path);
        return Err(OgcError::io("write temporary file", path, e));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("tester.md");

        atomic_write_file(&file_path, "---\nmode: \"subagent\"\n---\n\nBody").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "---\nmode: \"subagent\"\n---\n\nBody");
    }

    #[test]
    fn test_atomic_write_replace_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("clean.md");
        fs::write(&file_path, "stale output").unwrap();

        atomic_write_file(&file_path, "fresh output").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "fresh output");
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir
            .path()
            .join("generated/.opencode/agent/subagent/debugger.md");

        atomic_write_file(&file_path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "nested");
    }

    #[test]
    fn test_atomic_write_temp_file_cleanup() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.md");

        atomic_write_file(&file_path, "content").unwrap();

        assert!(!temp_dir.path().join(".test.md.tmp").exists());
    }

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let temp = temp_path(Path::new("/some/path/file.md")).unwrap();
        assert_eq!(temp, PathBuf::from("/some/path/.file.md.tmp"));
    }
}
