//! Output assembly: frontmatter plus body, written atomically.

use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::template::{render_frontmatter, strip_frontmatter};
use std::path::Path;
use tracing::info;

/// Build the final document from pass-through fields and a merged body.
///
/// Any frontmatter already present at the top of `body` is discarded.
pub fn render_document(fields: &toml::Table, body: &str) -> String {
    format!(
        "---\n{}---\n\n{}",
        render_frontmatter(fields),
        strip_frontmatter(body)
    )
}

/// Render and write a document to `path`, creating parent directories.
pub fn write_document(path: &Path, fields: &toml::Table, body: &str) -> Result<()> {
    let document = render_document(fields, body);
    atomic_write_file(path, &document)?;
    info!(path = %path.display(), bytes = document.len(), "wrote output");
    Ok(())
}
