//! Placeholder substitution and argument-vector tokenization.
//!
//! Substitution is textual and single-pass: every `{{name}}` with a supplied
//! value is replaced, inserted text is never scanned again, then the result
//! is split on whitespace. A value that contains
//! whitespace therefore becomes several arguments; nothing is quoted.
//! Placeholders without a value are left as-is so partial previews work.

use crate::error::{CliqError, Result};
use regex::{Captures, Regex};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::OnceLock;

static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();

fn placeholder_re() -> &'static Regex {
    PLACEHOLDER_RE.get_or_init(|| Regex::new(r"\{\{([^{}]*)\}\}").expect("valid regex"))
}

/// Runtime values keyed by variable name.
pub type Values = BTreeMap<String, Value>;

/// Canonical text for a runtime value.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Replace every `{{name}}` for which `values` has an entry.
pub fn substitute(template: &str, values: &Values) -> String {
    placeholder_re()
        .replace_all(template, |caps: &Captures| match values.get(&caps[1]) {
            Some(value) => value_text(value),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Render `template` into `[program, arg1, arg2, ...]`.
pub fn render_args(template: &str, values: &Values) -> Result<Vec<String>> {
    let args: Vec<String> = substitute(template, values)
        .split_whitespace()
        .map(str::to_string)
        .collect();
    if args.is_empty() {
        return Err(CliqError::EmptyCommand);
    }
    Ok(args)
}

/// Human-readable rendering: the argument vector joined by single spaces.
pub fn render_preview(template: &str, values: &Values) -> Result<String> {
    Ok(render_args(template, values)?.join(" "))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
