//! Frontmatter handling for generated Markdown.
//!
//! Template fragments may already carry a `---` delimited block of their own;
//! [`strip_frontmatter`] removes it before the generator synthesizes a fresh
//! one with [`render_frontmatter`].
//!
//! The writer is deliberately not a general YAML serializer. It emits one
//! line per key using fixed rules so that output is byte-for-byte stable:
//!
//! - strings are double-quoted (`\` and `"` escaped)
//! - booleans are lowercase, numbers literal
//! - arrays and non-permission tables use flow style
//! - `permissions` expands into an indented two-level block

use std::fmt::Write as _;

const DELIMITER: &str = "---";

/// Key whose value is rendered as a nested block instead of a flow mapping.
pub const PERMISSIONS_KEY: &str = "permissions";

/// Remove a leading frontmatter block from `content`.
///
/// The block must open on the first line and close on a later line, each
/// consisting of `---` (surrounding whitespace ignored). Blank lines right
/// after the closing delimiter are dropped as well. Anything else is returned
/// unchanged.
///
/// ```
/// use ogc::template::strip_frontmatter;
///
/// assert_eq!(strip_frontmatter("---\ntitle: old\n---\n\nBODY"), "BODY");
/// assert_eq!(strip_frontmatter("# No frontmatter"), "# No frontmatter");
/// ```
pub fn strip_frontmatter(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();

    if lines.first().map(|l| l.trim()) != Some(DELIMITER) {
        return content.to_string();
    }

    let Some(closing) = lines
        .iter()
        .skip(1)
        .position(|l| l.trim() == DELIMITER)
        .map(|i| i + 1)
    else {
        return content.to_string();
    };

    let body: Vec<&str> = lines[closing + 1..]
        .iter()
        .copied()
        .skip_while(|l| l.trim().is_empty())
        .collect();

    body.join("\n")
}

/// Render frontmatter lines (without the `---` delimiters).
///
/// Every line, including the last, ends with `\n`. Keys appear in table order.
pub fn render_frontmatter(fields: &toml::Table) -> String {
    let mut out = String::new();

    for (key, value) in fields {
        match value {
            toml::Value::Table(permissions) if key == PERMISSIONS_KEY => {
                let _ = writeln!(out, "{}:", key);
                render_permissions(&mut out, permissions);
            }
            _ => {
                let _ = writeln!(out, "{}: {}", key, render_value(value));
            }
        }
    }

    out
}

/// `permissions` block: categories at two spaces, rules at four.
///
/// Rule keys with string values are quoted since they are usually glob or
/// shell patterns (`"rm -rf *": "deny"`).
fn render_permissions(out: &mut String, permissions: &toml::Table) {
    for (category, rules) in permissions {
        match rules {
            toml::Value::Table(rules) => {
                let _ = writeln!(out, "  {}:", category);
                for (rule, verdict) in rules {
                    match verdict {
                        toml::Value::String(s) => {
                            let _ = writeln!(out, "    {}: {}", quote(rule), quote(s));
                        }
                        other => {
                            let _ = writeln!(out, "    {}: {}", rule, render_value(other));
                        }
                    }
                }
            }
            other => {
                let _ = writeln!(out, "  {}: {}", category, render_value(other));
            }
        }
    }
}

/// Render a single value in flow style.
pub fn render_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => quote(s),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => render_float(*f),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(items) => {
            let items: Vec<String> = items.iter().map(render_value).collect();
            format!("[{}]", items.join(", "))
        }
        toml::Value::Table(table) => {
            let entries: Vec<String> = table
                .iter()
                .map(|(k, v)| format!("{}: {}", k, render_value(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
    }
}

fn render_float(f: f64) -> String {
    if f.is_nan() {
        ".nan".to_string()
    } else if f.is_infinite() {
        let inf = if f > 0.0 { ".inf" } else { "-.inf" };
        inf.to_string()
    } else if f.fract() == 0.0 {
        format!("{:.1}", f)
    } else {
        f.to_string()
    }
}

fn quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}
