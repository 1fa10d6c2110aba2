//! Template resolution and merging.
//!
//! Produces the Markdown body of one generated file from the generator's
//! built-in fragments, an optional user template and any additional files.
//!
//! # Resolution order
//!
//! 1. Validate `additional_files_strategy`, `lang` and the custom template
//!    setting. No file is touched until these pass.
//! 2. Build the main content, unless `replace` makes it irrelevant:
//!    - `default`: base fragment, then the language fragment
//!    - `custom`: the user's `template_file`, verbatim
//! 3. Format additional files as `## <name>` sections.
//! 4. Combine according to the strategy.

use crate::config::{
    ControlFields, Language, MergeStrategy, ProjectPaths, TemplateMode, join_languages,
};
use crate::error::{FileKind, OgcError, Result};
use std::path::Path;
use tracing::{debug, warn};

/// Separator placed between the main template and the additional files.
const ADDITIONAL_FILES_SEPARATOR: &str = "\n\n# Additional Files\n\n";

/// Separator between fragments of the main template.
const PART_SEPARATOR: &str = "\n\n";

/// Built-in template locations of one generator, relative to the control tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateSources<'a> {
    /// Base fragment, e.g. `control/agents/subagents/tester.md`.
    pub base: Option<&'a str>,
    /// Directory holding `<lang>.md` fragments.
    pub language_dir: Option<&'a str>,
    /// Languages this generator accepts in `lang`.
    pub languages: &'a [Language],
    /// Heading text placed before the language fragment, after the
    /// capitalized language name (`# Elixir <suffix>`).
    pub language_heading: Option<&'a str>,
    /// Use the base fragment when `include_base` is off and nothing else
    /// resolved.
    pub fallback_to_base: bool,
}

/// Resolve the merged Markdown body for a generator section.
///
/// `include_base` is the effective `include_base_template` value (the
/// section's own setting or the generator's default).
///
/// # Returns
///
/// * `Ok(String)` - Merged, non-empty body (frontmatter not yet stripped)
/// * `Err(OgcError::InvalidStrategy)` - Unknown `additional_files_strategy`
/// * `Err(OgcError::UnsupportedLanguage)` - `lang` outside the supported set
/// * `Err(OgcError::MissingTemplateFile)` - `custom` without `template_file`
/// * `Err(OgcError::FileNotFound)` - Custom or additional file missing
/// * `Err(OgcError::NoTemplateContent)` - Nothing resolved to any text
pub fn resolve_template(
    sources: &TemplateSources<'_>,
    control: &ControlFields,
    include_base: bool,
    paths: &ProjectPaths,
) -> Result<String> {
    let strategy = MergeStrategy::from_str(&control.additional_files_strategy)
        .ok_or_else(|| OgcError::InvalidStrategy(control.additional_files_strategy.clone()))?;

    let language = parse_language(&control.lang, sources.languages)?;

    let mode = TemplateMode::from_str(&control.template);
    if mode == Some(TemplateMode::Custom) && control.template_file.is_empty() {
        return Err(OgcError::MissingTemplateFile);
    }
    if mode == Some(TemplateMode::Default) && !control.template_file.is_empty() {
        warn!(
            template_file = %control.template_file,
            "template_file is ignored because template is 'default'"
        );
    }

    let replacing = strategy == MergeStrategy::Replace && !control.additional_files.is_empty();

    let main = if replacing {
        debug!("additional files replace the main template");
        String::new()
    } else {
        match mode {
            Some(TemplateMode::Default) => default_content(sources, language, include_base, paths)?,
            Some(TemplateMode::Custom) => custom_content(&control.template_file, paths)?,
            None => return Err(OgcError::UnknownTemplateType(control.template.clone())),
        }
    };

    let additional = additional_content(&control.additional_files, paths)?;

    combine(&main, &additional, strategy, !control.additional_files.is_empty())
}

fn parse_language(lang: &str, supported: &[Language]) -> Result<Option<Language>> {
    if lang.is_empty() {
        return Ok(None);
    }

    match Language::from_str(lang) {
        Some(language) if supported.contains(&language) => Ok(Some(language)),
        _ => Err(OgcError::UnsupportedLanguage {
            lang: lang.to_string(),
            supported: if supported.is_empty() {
                "none".to_string()
            } else {
                join_languages(supported)
            },
        }),
    }
}

fn default_content(
    sources: &TemplateSources<'_>,
    language: Option<Language>,
    include_base: bool,
    paths: &ProjectPaths,
) -> Result<String> {
    let mut parts = Vec::new();

    if include_base {
        if let Some(base) = sources.base {
            if let Some(content) = read_fragment(&paths.control(base), "base")? {
                parts.push(content);
            }
        }
    }

    if let (Some(language), Some(dir)) = (language, sources.language_dir) {
        let path = paths.control(&format!("{}/{}.md", dir, language.as_str()));
        if let Some(content) = read_fragment(&path, "language")? {
            match sources.language_heading {
                Some(suffix) => {
                    parts.push(format!("# {} {}\n\n{}", language.title(), suffix, content));
                }
                None => parts.push(content),
            }
        }
    }

    if parts.is_empty() && !include_base && sources.fallback_to_base {
        if let Some(base) = sources.base {
            debug!("no fragment resolved, falling back to the base template");
            if let Some(content) = read_fragment(&paths.control(base), "base")? {
                parts.push(content);
            }
        }
    }

    Ok(parts.join(PART_SEPARATOR))
}

/// Read a built-in fragment; missing or blank fragments are skipped.
fn read_fragment(path: &Path, label: &str) -> Result<Option<String>> {
    if !path.exists() {
        warn!(path = %path.display(), "{} template not found, skipping", label);
        return Ok(None);
    }

    let content = read(path)?;
    if content.trim().is_empty() {
        warn!(path = %path.display(), "{} template is empty, skipping", label);
        return Ok(None);
    }

    debug!(path = %path.display(), bytes = content.len(), "read {} template", label);
    Ok(Some(content))
}

fn custom_content(template_file: &str, paths: &ProjectPaths) -> Result<String> {
    let path = paths.user_path(template_file);
    if !path.exists() {
        return Err(OgcError::FileNotFound {
            kind: FileKind::Custom,
            path,
        });
    }

    let content = read(&path)?;
    if content.is_empty() {
        return Err(OgcError::EmptyTemplate(path));
    }

    debug!(path = %path.display(), bytes = content.len(), "read custom template");
    Ok(content)
}

fn additional_content(files: &[String], paths: &ProjectPaths) -> Result<String> {
    let mut sections = Vec::new();

    for file in files {
        let path = paths.user_path(file);
        if !path.exists() {
            return Err(OgcError::FileNotFound {
                kind: FileKind::Additional,
                path,
            });
        }

        let content = read(&path)?;
        if content.trim().is_empty() {
            debug!(path = %path.display(), "skipping blank additional file");
            continue;
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.clone());
        sections.push(format!("## {}\n\n{}", name, content));
    }

    Ok(sections.join(PART_SEPARATOR))
}

fn combine(
    main: &str,
    additional: &str,
    strategy: MergeStrategy,
    has_additional_files: bool,
) -> Result<String> {
    let body = if strategy == MergeStrategy::Replace && has_additional_files {
        additional.to_string()
    } else if main.is_empty() {
        additional.to_string()
    } else if additional.is_empty() {
        main.to_string()
    } else {
        format!("{}{}{}", main, ADDITIONAL_FILES_SEPARATOR, additional)
    };

    if body.trim().is_empty() {
        return Err(OgcError::NoTemplateContent);
    }
    Ok(body)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| OgcError::io("read template", path, e))
}
