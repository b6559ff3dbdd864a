use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// VariableType
// ---------------------------------------------------------------------------

/// Semantic type of a template variable.
///
/// Type strings outside the supported set are kept as `Unknown` rather than
/// failing deserialization, so validation can report them by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VariableType {
    #[default]
    Text,
    FileInput,
    FileOutput,
    Boolean,
    Number,
    Select,
    Unknown(String),
}

impl VariableType {
    pub fn all() -> &'static [VariableType] {
        &[
            VariableType::Text,
            VariableType::FileInput,
            VariableType::FileOutput,
            VariableType::Boolean,
            VariableType::Number,
            VariableType::Select,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            VariableType::Text => "text",
            VariableType::FileInput => "file_input",
            VariableType::FileOutput => "file_output",
            VariableType::Boolean => "boolean",
            VariableType::Number => "number",
            VariableType::Select => "select",
            VariableType::Unknown(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, VariableType::Unknown(_))
    }
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for VariableType {
    fn from(s: &str) -> Self {
        match s {
            "text" => VariableType::Text,
            "file_input" => VariableType::FileInput,
            "file_output" => VariableType::FileOutput,
            "boolean" => VariableType::Boolean,
            "number" => VariableType::Number,
            "select" => VariableType::Select,
            other => VariableType::Unknown(other.to_string()),
        }
    }
}

impl From<String> for VariableType {
    fn from(s: String) -> Self {
        VariableType::from(s.as_str())
    }
}

impl From<VariableType> for String {
    fn from(t: VariableType) -> Self {
        t.as_str().to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
