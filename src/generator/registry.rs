//! Static table of every agent and command generator.
//!
//! Each row describes one artifact: where its section lives in the TOML
//! document, which built-in fragments it draws from, and where the result
//! is written. The pipeline itself is shared; a row is all a generator is.

use crate::config::{CONTROL_KEYS, Language, VCS_KEY};
use crate::template::TemplateSources;

/// What a generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    PrimaryAgent,
    Subagent,
    Command,
}

impl GeneratorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorKind::PrimaryAgent => "primary",
            GeneratorKind::Subagent => "subagent",
            GeneratorKind::Command => "command",
        }
    }
}

/// Where a generator's output goes, relative to `generated/.opencode/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputRule {
    Fixed(&'static str),
    /// Chosen by the section's `mode`: `subagent` selects the second path.
    ByMode {
        primary: &'static str,
        subagent: &'static str,
    },
}

/// Default frontmatter for command generators.
///
/// `description` defaults to `"<Title> command"` and is not stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDefaults {
    pub agent: &'static str,
    pub model: &'static str,
}

const COMMAND_DEFAULTS: CommandDefaults = CommandDefaults {
    agent: "build",
    model: "anthropic/claude-sonnet-4-20250514",
};

/// Static description of one generator.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorDef {
    pub name: &'static str,
    pub kind: GeneratorKind,
    /// Dotted TOML path of the section.
    pub section: &'static str,
    pub base_template: Option<&'static str>,
    pub language_dir: Option<&'static str>,
    pub languages: &'static [Language],
    /// Heading suffix for the language fragment (`# Elixir <suffix>`).
    pub language_heading: Option<&'static str>,
    pub include_base_default: bool,
    /// Use the base template when `include_base_template` is off and no
    /// language fragment resolved.
    pub fallback_to_base: bool,
    pub output: OutputRule,
    pub defaults: Option<CommandDefaults>,
    /// Sections with a `vcs` other than git are skipped.
    pub requires_git_vcs: bool,
}

impl GeneratorDef {
    /// Section path split into its table segments.
    pub fn section_path(&self) -> Vec<&'static str> {
        self.section.split('.').collect()
    }

    pub fn sources(&self) -> TemplateSources<'static> {
        TemplateSources {
            base: self.base_template,
            language_dir: self.language_dir,
            languages: self.languages,
            language_heading: self.language_heading,
            fallback_to_base: self.fallback_to_base,
        }
    }

    /// Keys consumed by this generator and kept out of the frontmatter.
    pub fn control_keys(&self) -> Vec<&'static str> {
        let mut keys = CONTROL_KEYS.to_vec();
        if self.requires_git_vcs {
            keys.push(VCS_KEY);
        }
        keys
    }

    /// Output path for the given agent `mode`.
    pub fn output_path(&self, mode: Option<&str>) -> &'static str {
        match self.output {
            OutputRule::Fixed(path) => path,
            OutputRule::ByMode { primary, subagent } => {
                if mode == Some("subagent") {
                    subagent
                } else {
                    primary
                }
            }
        }
    }

    /// `clean` -> `Clean`, `code-pattern-analyst` -> `Code-pattern-analyst`.
    pub fn title(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

const ALL_LANGUAGES: &[Language] = &[Language::Elixir, Language::Kotlin, Language::Typescript];
const NO_LANGUAGES: &[Language] = &[];

const fn agent(
    name: &'static str,
    kind: GeneratorKind,
    section: &'static str,
    base_template: &'static str,
    output: &'static str,
) -> GeneratorDef {
    GeneratorDef {
        name,
        kind,
        section,
        base_template: Some(base_template),
        language_dir: None,
        languages: NO_LANGUAGES,
        language_heading: None,
        include_base_default: true,
        fallback_to_base: false,
        output: OutputRule::Fixed(output),
        defaults: None,
        requires_git_vcs: false,
    }
}

const fn language_subagent(
    name: &'static str,
    section: &'static str,
    base_template: &'static str,
    language_dir: &'static str,
    languages: &'static [Language],
    output: &'static str,
) -> GeneratorDef {
    GeneratorDef {
        name,
        kind: GeneratorKind::Subagent,
        section,
        base_template: Some(base_template),
        language_dir: Some(language_dir),
        languages,
        language_heading: None,
        include_base_default: true,
        fallback_to_base: false,
        output: OutputRule::Fixed(output),
        defaults: None,
        requires_git_vcs: false,
    }
}

const fn command(
    name: &'static str,
    section: &'static str,
    base_template: &'static str,
    language_dir: Option<&'static str>,
    include_base_default: bool,
    output: &'static str,
) -> GeneratorDef {
    GeneratorDef {
        name,
        kind: GeneratorKind::Command,
        section,
        base_template: Some(base_template),
        language_dir,
        languages: if language_dir.is_some() {
            ALL_LANGUAGES
        } else {
            NO_LANGUAGES
        },
        language_heading: None,
        include_base_default,
        fallback_to_base: language_dir.is_some(),
        output: OutputRule::Fixed(output),
        defaults: Some(COMMAND_DEFAULTS),
        requires_git_vcs: false,
    }
}

/// Every generator, in the order `ogc all` runs them.
pub static GENERATORS: &[GeneratorDef] = &[
    agent(
        "task-manager",
        GeneratorKind::PrimaryAgent,
        "opencode.agents.task-manager",
        "control/agents/task-manager.md",
        "agent/task-manager.md",
    ),
    agent(
        "codebase-agent",
        GeneratorKind::PrimaryAgent,
        "opencode.agents.codebase-agent",
        "control/agents/codebase-agent.md",
        "agent/codebase-agent.md",
    ),
    GeneratorDef {
        name: "debugger",
        kind: GeneratorKind::Subagent,
        section: "opencode.agents.subagents.debugger",
        base_template: Some("control/agents/debugger/base.md"),
        language_dir: Some("control/agents/debugger"),
        languages: ALL_LANGUAGES,
        language_heading: None,
        include_base_default: true,
        fallback_to_base: false,
        output: OutputRule::ByMode {
            primary: "agent/debugger.md",
            subagent: "agent/subagent/debugger.md",
        },
        defaults: None,
        requires_git_vcs: false,
    },
    agent(
        "tester",
        GeneratorKind::Subagent,
        "opencode.agents.subagents.tester",
        "control/agents/subagents/tester.md",
        "agent/subagent/tester.md",
    ),
    agent(
        "reviewer",
        GeneratorKind::Subagent,
        "opencode.agents.subagents.reviewer",
        "control/agents/subagents/reviewer.md",
        "agent/subagent/reviewer.md",
    ),
    agent(
        "documentation",
        GeneratorKind::Subagent,
        "opencode.agents.subagents.documentation",
        "control/agents/subagents/documentation.md",
        "agent/subagent/documentation.md",
    ),
    GeneratorDef {
        language_heading: Some("Blockchain Development Specifics"),
        ..language_subagent(
            "blockchain-agent",
            "opencode.agents.subagents.blockchain-agent",
            "control/agents/subagents/blockchain-agent/base.md",
            "control/agents/subagents/blockchain-agent",
            &[Language::Elixir, Language::Typescript],
            "agent/subagent/blockchain-agent.md",
        )
    },
    language_subagent(
        "coder-agent",
        "opencode.agents.subagents.coder-agent",
        "control/agents/subagents/coder-agent/base.md",
        "control/agents/subagents/coder-agent",
        ALL_LANGUAGES,
        "agent/subagent/coder-agent.md",
    ),
    language_subagent(
        "code-pattern-analyst",
        "opencode.agents.subagents.code-pattern-analyst",
        "control/agents/subagents/code-pattern-analyst/base.md",
        "control/agents/subagents/code-pattern-analyst",
        ALL_LANGUAGES,
        "agent/subagent/code-pattern-analyst.md",
    ),
    command(
        "clean",
        "opencode.commands.clean",
        "control/commands/generic/clean/base.md",
        Some("control/commands/generic/clean"),
        false,
        "command/clean.md",
    ),
    command(
        "test",
        "opencode.commands.test",
        "control/commands/generic/test/base.md",
        Some("control/commands/generic/test"),
        false,
        "command/test.md",
    ),
    command(
        "optimizer",
        "opencode.commands.optimizer",
        "control/commands/generic/optimizer/base.md",
        Some("control/commands/generic/optimizer"),
        false,
        "command/optimizer.md",
    ),
    GeneratorDef {
        requires_git_vcs: true,
        ..command(
            "commit",
            "opencode.commands.commit",
            "control/commands/generic/git-commit.md",
            None,
            true,
            "command/commit.md",
        )
    },
    command(
        "context",
        "opencode.commands.context",
        "control/commands/generic/context.md",
        None,
        true,
        "command/context.md",
    ),
    command(
        "prompter",
        "opencode.commands.prompter",
        "control/commands/generic/prompter.md",
        None,
        false,
        "command/prompter.md",
    ),
    command(
        "worktrees",
        "opencode.commands.worktrees",
        "control/commands/generic/worktrees.md",
        None,
        true,
        "command/worktrees.md",
    ),
];

/// Look up a generator by name.
pub fn find(name: &str) -> Option<&'static GeneratorDef> {
    GENERATORS.iter().find(|def| def.name == name)
}

/// Comma-separated generator names, for error messages.
pub fn available_names() -> String {
    GENERATORS
        .iter()
        .map(|def| def.name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_and_outputs_are_unique() {
        let names: HashSet<_> = GENERATORS.iter().map(|d| d.name).collect();
        assert_eq!(names.len(), GENERATORS.len());

        let outputs: HashSet<_> = GENERATORS.iter().map(|d| d.output_path(None)).collect();
        assert_eq!(outputs.len(), GENERATORS.len());
    }

    #[test]
    fn test_find_known_and_unknown() {
        assert_eq!(find("tester").unwrap().kind, GeneratorKind::Subagent);
        assert!(find("nope").is_none());
    }

    #[test]
    fn test_debugger_output_follows_mode() {
        let def = find("debugger").unwrap();
        assert_eq!(def.output_path(Some("subagent")), "agent/subagent/debugger.md");
        assert_eq!(def.output_path(Some("primary")), "agent/debugger.md");
        assert_eq!(def.output_path(None), "agent/debugger.md");
    }

    #[test]
    fn test_commit_consumes_vcs_key() {
        let commit = find("commit").unwrap();
        assert!(commit.control_keys().contains(&"vcs"));
        assert!(!find("clean").unwrap().control_keys().contains(&"vcs"));
    }

    #[test]
    fn test_commands_carry_defaults() {
        for def in GENERATORS {
            assert_eq!(
                def.defaults.is_some(),
                def.kind == GeneratorKind::Command,
                "{}",
                def.name
            );
        }
    }

    #[test]
    fn test_blockchain_agent_languages_and_heading() {
        let def = find("blockchain-agent").unwrap();
        assert_eq!(def.languages, &[Language::Elixir, Language::Typescript]);
        assert_eq!(
            def.language_heading,
            Some("Blockchain Development Specifics")
        );
    }

    #[test]
    fn test_section_path_splits_on_dots() {
        assert_eq!(
            find("code-pattern-analyst").unwrap().section_path(),
            ["opencode", "agents", "subagents", "code-pattern-analyst"]
        );
    }

    #[test]
    fn test_language_commands_fall_back_to_base() {
        for name in ["clean", "test", "optimizer"] {
            let def = find(name).unwrap();
            assert!(!def.include_base_default, "{}", name);
            assert!(def.fallback_to_base, "{}", name);
        }
        assert!(!find("prompter").unwrap().fallback_to_base);
        assert!(!find("coder-agent").unwrap().fallback_to_base);
    }

    #[test]
    fn test_title_capitalizes_first_letter() {
        assert_eq!(find("clean").unwrap().title(), "Clean");
        assert_eq!(find("worktrees").unwrap().title(), "Worktrees");
    }
}
