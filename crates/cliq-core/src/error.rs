use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliqError {
    #[error("empty input: {0} must not be empty")]
    EmptyInput(&'static str),

    #[error("invalid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("template validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("favorite template not found: {0}")]
    NotFound(String),

    #[error("favorite template file is empty: {0}")]
    EmptyFile(String),

    #[error("command not found: {0}")]
    CommandNotFound(String),

    #[error("rendered command is empty")]
    EmptyCommand,

    #[error("command '{program}' failed: {reason}\n{output}")]
    Execution {
        program: String,
        reason: String,
        output: String,
    },

    #[error("invalid setting '{key}': {reason}")]
    InvalidSetting { key: &'static str, reason: String },

    #[error("cannot decode payload: {0}")]
    Decode(String),

    #[error("home directory not found: set HOME environment variable")]
    HomeNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A structural rule violation found by [`crate::validate`].
///
/// Command and variable indices are 1-based so messages can be shown to users
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("template field '{0}' must not be empty")]
    MissingField(&'static str),

    #[error("template must contain at least one command")]
    NoCommands,

    #[error("command #{command}: field '{field}' must not be empty")]
    MissingCommandField { command: usize, field: &'static str },

    #[error("command #{command}: variable #{variable} has an empty name")]
    MissingVariableName { command: usize, variable: usize },

    #[error("command #{command}: variable '{name}' has an empty label")]
    MissingVariableLabel { command: usize, name: String },

    #[error("command #{command}: variable '{name}' has unsupported type '{var_type}'")]
    UnknownVariableType {
        command: usize,
        name: String,
        var_type: String,
    },

    #[error("command #{command}: duplicate variable name '{name}'")]
    DuplicateVariable { command: usize, name: String },

    #[error("command #{command}: variable '{name}' is not referenced in the command template")]
    UnreferencedVariable { command: usize, name: String },
}

pub type Result<T> = std::result::Result<T, CliqError>;
