use crate::error::{CliqError, Result};
use crate::types::VariableType;
use crate::validate::{self, Profile};
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Type-specific variable settings (`min`, `max`, `default`, `file_types`, ...).
pub type VariableOptions = BTreeMap<String, serde_yaml::Value>;

// ---------------------------------------------------------------------------
// VariableDefinition
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableDefinition {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub var_type: VariableType,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: VariableOptions,
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Command {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "command", default)]
    pub command_template: String,
    /// Always written as a sequence; the legacy name-keyed mapping is accepted
    /// on read.
    #[serde(default, deserialize_with = "deserialize_variables")]
    pub variables: Vec<VariableDefinition>,
}

impl Command {
    pub fn variable(&self, name: &str) -> Option<&VariableDefinition> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Placeholder names used by `command_template`, in first-seen order.
    pub fn placeholders(&self) -> Vec<String> {
        crate::infer::extract_placeholders(&self.command_template)
    }
}

/// Accepts either a sequence of variables or the legacy mapping keyed by
/// variable name. Elements are read straight from the source document so
/// field errors keep their full path (`cmds[0].variables[1].required: ...`).
fn deserialize_variables<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<VariableDefinition>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(VariablesVisitor)
}

struct VariablesVisitor;

impl<'de> Visitor<'de> for VariablesVisitor {
    type Value = Vec<VariableDefinition>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of variables or a mapping of variable name to definition")
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_seq<A: SeqAccess<'de>>(
        self,
        mut seq: A,
    ) -> std::result::Result<Self::Value, A::Error> {
        let mut vars = Vec::new();
        while let Some(var) = seq.next_element::<VariableDefinition>()? {
            vars.push(var);
        }
        Ok(vars)
    }

    fn visit_map<A: MapAccess<'de>>(
        self,
        mut map: A,
    ) -> std::result::Result<Self::Value, A::Error> {
        let mut vars = Vec::new();
        while let Some(name) = map.next_key::<String>()? {
            let mut var: VariableDefinition = map.next_value()?;
            var.name = name;
            vars.push(var);
        }
        Ok(vars)
    }
}

// ---------------------------------------------------------------------------
// TemplateDocument
// ---------------------------------------------------------------------------

/// An in-memory cliqfile: metadata plus an ordered list of commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub author: String,
    #[serde(rename = "cliq_template_version", default)]
    pub template_spec_version: String,
    #[serde(rename = "cmds", default)]
    pub commands: Vec<Command>,
}

impl TemplateDocument {
    pub fn command(&self, id: &str) -> Result<&Command> {
        self.commands
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| CliqError::CommandNotFound(id.to_string()))
    }

    pub fn validate(&self, profile: Profile) -> Result<()> {
        validate::validate(self, profile)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // YAML codec
    // -----------------------------------------------------------------------

    /// Parse cliqfile YAML. Does not validate.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Err(CliqError::EmptyInput("template YAML"));
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self)?;
        if yaml.trim().is_empty() || yaml.trim() == "{}" {
            return Err(CliqError::EmptyInput("serialized template"));
        }
        Ok(yaml)
    }

    /// Parse and then validate under `profile`.
    pub fn parse_and_validate(yaml: &str, profile: Profile) -> Result<Self> {
        let doc = Self::from_yaml(yaml)?;
        doc.validate(profile)?;
        Ok(doc)
    }

    // -----------------------------------------------------------------------
    // Files
    // -----------------------------------------------------------------------

    pub fn import_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::parse_and_validate(&data, Profile::Standard)
    }

    pub fn export_file(&self, path: &Path) -> Result<()> {
        let yaml = self.to_yaml()?;
        crate::io::atomic_write(path, yaml.as_bytes())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
