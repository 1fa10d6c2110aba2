//! Pass-through extraction for generated frontmatter.
//!
//! A generator section mixes control keys (consumed by ogc) with fields that
//! belong in the output frontmatter. Everything that is not a control key is
//! passed through in document order; `permissions` is reshaped on the way.

use super::frontmatter::PERMISSIONS_KEY;
use tracing::warn;

/// Config sub-table name and the frontmatter category it becomes.
const PERMISSION_CATEGORIES: &[(&str, &str)] = &[
    ("tools", "tools"),
    ("bash_rules", "bash"),
    ("edit_rules", "edit"),
];

/// Copy every key of `section` that is not in `control_keys`.
///
/// `permissions` is rewritten by `format_permissions`; when nothing is left
/// after reshaping the key is dropped.
pub fn extract_pass_through(section: &toml::Table, control_keys: &[&str]) -> toml::Table {
    let mut fields = toml::Table::new();

    for (key, value) in section {
        if control_keys.contains(&key.as_str()) {
            continue;
        }

        if key == PERMISSIONS_KEY {
            match value.as_table() {
                Some(permissions) => {
                    let reshaped = format_permissions(permissions);
                    if !reshaped.is_empty() {
                        fields.insert(key.clone(), toml::Value::Table(reshaped));
                    }
                }
                None => warn!("ignoring non-table permissions value"),
            }
            continue;
        }

        fields.insert(key.clone(), value.clone());
    }

    fields
}

/// Reshape `{tools, bash_rules, edit_rules}` into `{tools, bash, edit}`.
///
/// A category is kept only when its source is a non-empty table. Other keys
/// under `permissions` are not carried over.
fn format_permissions(permissions: &toml::Table) -> toml::Table {
    let mut reshaped = toml::Table::new();

    for (source, target) in PERMISSION_CATEGORIES {
        match permissions.get(*source).and_then(toml::Value::as_table) {
            Some(rules) if !rules.is_empty() => {
                reshaped.insert(target.to_string(), toml::Value::Table(rules.clone()));
            }
            _ => {}
        }
    }

    reshaped
}

/// Put default fields ahead of `fields` for any key it does not already have.
///
/// Defaults keep their given order; existing keys keep their position and value.
pub fn apply_defaults(fields: toml::Table, defaults: &[(&str, String)]) -> toml::Table {
    let mut merged = toml::Table::new();

    for (key, value) in defaults {
        if !fields.contains_key(*key) {
            merged.insert(key.to_string(), toml::Value::String(value.clone()));
        }
    }
    merged.extend(fields);

    merged
}
