//! Template handling: resolving Markdown bodies and rendering frontmatter.

pub mod extract;
pub mod frontmatter;
pub mod resolver;

pub use extract::{apply_defaults, extract_pass_through};
pub use frontmatter::{render_frontmatter, strip_frontmatter};
pub use resolver::{TemplateSources, resolve_template};
