//! Implementation of the `ogc all` command.
//!
//! Runs every registered generator against one loaded configuration. A
//! failing generator does not stop the run; failures are counted and the
//! command exits non-zero at the end.

use crate::config::{ConfigDocument, Layout};
use crate::error::{OgcError, Result};
use crate::generator::{GENERATORS, Generator, Outcome};
use std::path::PathBuf;
use tracing::warn;

/// Counts reported after a full run.
#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    generated: usize,
    skipped: usize,
    failed: usize,
}

/// Execute the `ogc all` command.
pub fn cmd_all(config_path: PathBuf, layout: Layout) -> Result<()> {
    let summary = run_all(config_path, layout)?;

    println!();
    println!("Summary:");
    println!("  Generated: {}", summary.generated);
    println!("  Skipped:   {}", summary.skipped);
    println!("  Failed:    {}", summary.failed);

    if summary.failed > 0 {
        return Err(OgcError::GeneratorsFailed {
            failed: summary.failed,
            total: GENERATORS.len(),
        });
    }
    Ok(())
}

fn run_all(config_path: PathBuf, layout: Layout) -> Result<Summary> {
    let paths = layout.resolve(&config_path)?;
    let doc = ConfigDocument::load(&paths.config_path)?;
    let mut summary = Summary::default();

    for def in GENERATORS {
        let generator = Generator::new(def, config_path.clone(), layout);
        match generator.generate_with(&doc, &paths) {
            Ok(Outcome::Generated(path)) => {
                summary.generated += 1;
                println!("  generated  {:22} {}", def.name, path.display());
            }
            Ok(Outcome::Skipped(reason)) => {
                summary.skipped += 1;
                println!("  skipped    {:22} {}", def.name, reason);
            }
            Err(err) => {
                summary.failed += 1;
                warn!(generator = def.name, error = %err, "generator failed");
                eprintln!("Error: {}", OgcError::generating(def.name, err));
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestProject;

    #[test]
    fn test_all_continues_after_failure() {
        let project = TestProject::flat();
        project
            .config(
                r#"
[opencode.agents.task-manager]
mode = "primary"

[opencode.commands.commit]
vcs = "svn"

[opencode.commands.context]
enabled = false

[opencode.commands.prompter]
template = "custom"
"#,
            )
            .control("control/agents/task-manager.md", "# Task Manager")
            .control("control/commands/generic/git-commit.md", "# Commit")
            .control("control/commands/generic/prompter.md", "# Prompter");

        let summary = run_all(project.config_path(), Layout::Flat).unwrap();
        assert_eq!(
            summary,
            Summary {
                generated: 1,
                skipped: GENERATORS.len() - 2,
                failed: 1,
            }
        );
        assert!(project.output("agent/task-manager.md").exists());
        assert!(!project.output("command/commit.md").exists());
        assert!(!project.output("command/prompter.md").exists());

        let err = cmd_all(project.config_path(), Layout::Flat).unwrap_err();
        assert!(matches!(err, OgcError::GeneratorsFailed { failed: 1, .. }));
    }

    #[test]
    fn test_all_with_missing_config_fails() {
        let project = TestProject::nested();
        let err = run_all(project.config_path(), Layout::Nested).unwrap_err();
        assert!(matches!(err, OgcError::ConfigNotFound(_)));
    }

    #[test]
    fn test_all_succeeds_when_nothing_fails() {
        let project = TestProject::nested();
        project
            .config("[opencode.agents.subagents.reviewer]\ndescription = \"Reviews\"\n")
            .control("control/agents/subagents/reviewer.md", "# Reviewer");

        cmd_all(project.config_path(), Layout::Nested).unwrap();
        assert!(
            project
                .root()
                .join("ogc/generated/.opencode/agent/subagent/reviewer.md")
                .exists()
        );
    }
}
