//! Tests for generator section parsing.

use crate::config::{ConfigDocument, GeneratorSection, Language, MergeStrategy, TemplateMode};
use crate::error::OgcError;

fn section_from(toml: &str, path: &[&str]) -> GeneratorSection {
    let doc = ConfigDocument::from_toml(toml).unwrap();
    let table = doc.section(path).unwrap();
    GeneratorSection::from_table(path.last().unwrap(), table).unwrap()
}

#[test]
fn test_control_defaults() {
    let section = section_from(
        r#"
[opencode.commands.context]
description = "Load context"
"#,
        &["opencode", "commands", "context"],
    );

    let control = &section.control;
    assert!(control.enabled);
    assert_eq!(control.template, "default");
    assert_eq!(control.template_file, "");
    assert_eq!(control.lang, "");
    assert_eq!(control.include_base_template, None);
    assert!(control.additional_files.is_empty());
    assert_eq!(control.additional_files_strategy, "merge");
}

#[test]
fn test_control_fields_parsed() {
    let section = section_from(
        r#"
[opencode.agents.subagents.coder-agent]
enabled = false
template = "custom"
template_file = "custom/coder.md"
lang = "kotlin"
include_base_template = false
additional_files = ["docs/a.md", "docs/b.md"]
additional_files_strategy = "replace"
"#,
        &["opencode", "agents", "subagents", "coder-agent"],
    );

    let control = &section.control;
    assert!(!control.enabled);
    assert_eq!(control.template, "custom");
    assert_eq!(control.template_file, "custom/coder.md");
    assert_eq!(control.lang, "kotlin");
    assert_eq!(control.include_base_template, Some(false));
    assert_eq!(control.additional_files, vec!["docs/a.md", "docs/b.md"]);
    assert_eq!(control.additional_files_strategy, "replace");
}

#[test]
fn test_pass_through_keys_do_not_break_parsing() {
    let section = section_from(
        r#"
[opencode.agents.subagents.tester]
description = "Tester"
mode = "subagent"
temperature = 0.1

[opencode.agents.subagents.tester.permissions.tools]
read = true
"#,
        &["opencode", "agents", "subagents", "tester"],
    );

    assert!(section.control.enabled);
    assert_eq!(section.mode(), Some("subagent"));
    assert!(section.table.contains_key("permissions"));
}

#[test]
fn test_wrong_control_type_is_invalid_config() {
    let doc = ConfigDocument::from_toml(
        r#"
[opencode.commands.test]
enabled = "yes"
"#,
    )
    .unwrap();
    let table = doc.section(&["opencode", "commands", "test"]).unwrap();

    let err = GeneratorSection::from_table("test", table).unwrap_err();
    match err {
        OgcError::InvalidConfig { section, .. } => assert_eq!(section, "test"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_table_keeps_document_order() {
    let section = section_from(
        r#"
[opencode.agents.task-manager]
model = "m"
description = "d"
mode = "primary"
"#,
        &["opencode", "agents", "task-manager"],
    );

    let keys: Vec<&str> = section.table.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["model", "description", "mode"]);
}

#[test]
fn test_enum_parsing() {
    assert_eq!(TemplateMode::from_str("default"), Some(TemplateMode::Default));
    assert_eq!(TemplateMode::from_str("custom"), Some(TemplateMode::Custom));
    assert_eq!(TemplateMode::from_str("fancy"), None);

    assert_eq!(MergeStrategy::from_str("merge"), Some(MergeStrategy::Merge));
    assert_eq!(MergeStrategy::from_str("replace"), Some(MergeStrategy::Replace));
    assert_eq!(MergeStrategy::from_str("append"), None);

    assert_eq!(Language::from_str("elixir"), Some(Language::Elixir));
    assert_eq!(Language::from_str("Elixir"), None);
    assert_eq!(Language::Typescript.title(), "Typescript");
}
