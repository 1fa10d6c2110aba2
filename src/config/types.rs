//! Enumerations and defaults for generator configuration.
//!
//! Control values arrive as plain strings from TOML and are parsed here, so
//! that an invalid value produces an ogc error with the offending text rather
//! than a generic deserialization message.

/// How the main template is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateMode {
    /// Base fragment plus optional language fragment.
    #[default]
    Default,
    /// A user-supplied `template_file` replaces base and language fragments.
    Custom,
}

impl TemplateMode {
    /// Parse a template mode from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "default" => Some(Self::Default),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Custom => "custom",
        }
    }
}

/// How `additional_files` combine with the main template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeStrategy {
    /// Append additional files after the main template (default).
    #[default]
    Merge,
    /// Additional files replace the main template entirely.
    Replace,
}

impl MergeStrategy {
    /// Parse a merge strategy from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "merge" => Some(Self::Merge),
            "replace" => Some(Self::Replace),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Replace => "replace",
        }
    }
}

/// Languages that have dedicated template fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Elixir,
    Kotlin,
    Typescript,
}

impl Language {
    /// Parse a language tag from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "elixir" => Some(Self::Elixir),
            "kotlin" => Some(Self::Kotlin),
            "typescript" => Some(Self::Typescript),
            _ => None,
        }
    }

    /// Tag as written in configuration and in fragment file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Elixir => "elixir",
            Self::Kotlin => "kotlin",
            Self::Typescript => "typescript",
        }
    }

    /// Capitalized form used in injected headings.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Elixir => "Elixir",
            Self::Kotlin => "Kotlin",
            Self::Typescript => "Typescript",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a supported-language set the way error messages list it.
pub fn join_languages(languages: &[Language]) -> String {
    languages
        .iter()
        .map(Language::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_template() -> String {
    TemplateMode::Default.as_str().to_string()
}

pub(crate) fn default_strategy() -> String {
    MergeStrategy::Merge.as_str().to_string()
}
