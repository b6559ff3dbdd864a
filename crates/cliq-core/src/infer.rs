//! Variable inference: turn a raw command line with `{{name}}` placeholders
//! into a one-command template with guessed variable definitions.

use crate::error::{CliqError, Result};
use crate::template::{Command, TemplateDocument, VariableDefinition, VariableOptions};
use crate::types::VariableType;
use serde_yaml::Value;

pub const GENERATED_TEMPLATE_NAME: &str = "Generated Template";
pub const GENERATED_COMMAND_ID: &str = "generated_cmd_1";
pub const TEMPLATE_SPEC_VERSION: &str = "1.0";

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Placeholder names in `command`, in order of first appearance, without
/// duplicates.
///
/// The command is split on whitespace first, so a placeholder broken across
/// whitespace is never recognised. An unterminated `{{` is ignored.
pub fn extract_placeholders(command: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for part in command.split_whitespace() {
        let mut rest = part;
        while let Some(open) = rest.find(OPEN) {
            let after_open = &rest[open + OPEN.len()..];
            let Some(close) = after_open.find(CLOSE) else {
                break;
            };
            let name = &after_open[..close];
            if !name.is_empty() && !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
            rest = &after_open[close + CLOSE.len()..];
        }
    }
    names
}

/// Guess a variable type from its name. Rules are checked in priority order
/// and matching is case-sensitive.
pub fn infer_type(name: &str) -> VariableType {
    let has = |needles: &[&str]| needles.iter().any(|n| name.contains(n));

    if has(&["file", "path"]) {
        if has(&["input", "src"]) {
            VariableType::FileInput
        } else if has(&["output", "dest"]) {
            VariableType::FileOutput
        } else {
            VariableType::FileInput
        }
    } else if has(&["number", "size", "width", "height"]) {
        VariableType::Number
    } else if has(&["enable", "use", "flag", "show"]) {
        VariableType::Boolean
    } else {
        VariableType::Text
    }
}

/// `output_dir-name` → `Output dir name`
pub fn label_for(name: &str) -> String {
    let spaced = name.replace(['_', '-'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Default options for a freshly inferred variable of type `var_type`.
pub fn default_options(var_type: &VariableType) -> VariableOptions {
    let mut options = VariableOptions::new();
    match var_type {
        VariableType::FileInput | VariableType::FileOutput => {
            options.insert(
                "file_types".to_string(),
                Value::Sequence(vec![Value::from(".*")]),
            );
        }
        VariableType::Number => {
            options.insert("default".to_string(), Value::from(1));
            options.insert("min".to_string(), Value::from(0));
            options.insert("max".to_string(), Value::from(100));
        }
        VariableType::Boolean => {
            options.insert("default".to_string(), Value::from(false));
        }
        VariableType::Text | VariableType::Select | VariableType::Unknown(_) => {}
    }
    options
}

pub fn infer_variable(name: &str) -> VariableDefinition {
    let var_type = infer_type(name);
    VariableDefinition {
        name: name.to_string(),
        label: label_for(name),
        description: format!("The {name} parameter"),
        required: true,
        options: default_options(&var_type),
        var_type,
    }
}

/// Build a single-command template around `command`, with one inferred
/// variable per distinct placeholder.
pub fn infer_template(command: &str) -> Result<TemplateDocument> {
    if command.trim().is_empty() {
        return Err(CliqError::EmptyInput("command"));
    }

    let variables = extract_placeholders(command)
        .iter()
        .map(|name| infer_variable(name))
        .collect();

    Ok(TemplateDocument {
        name: GENERATED_TEMPLATE_NAME.to_string(),
        description: "Automatically generated template from command".to_string(),
        version: "1.0".to_string(),
        author: "cliQ".to_string(),
        template_spec_version: TEMPLATE_SPEC_VERSION.to_string(),
        commands: vec![Command {
            id: GENERATED_COMMAND_ID.to_string(),
            name: "Generated Command".to_string(),
            description: "Automatically generated command".to_string(),
            command_template: command.to_string(),
            variables,
        }],
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
