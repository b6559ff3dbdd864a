use crate::error::ValidationError;
use crate::template::TemplateDocument;
use std::collections::HashSet;

/// How strictly a document is checked.
///
/// `Strict` is the profile applied to machine-generated templates: all
/// metadata must be filled in and every declared variable must be used by
/// its command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Profile {
    #[default]
    Standard,
    Strict,
}

/// Check the structural rules of a cliqfile. The first violation is returned.
pub fn validate(doc: &TemplateDocument, profile: Profile) -> Result<(), ValidationError> {
    if doc.name.is_empty() {
        return Err(ValidationError::MissingField("name"));
    }
    if doc.template_spec_version.is_empty() {
        return Err(ValidationError::MissingField("cliq_template_version"));
    }
    if profile == Profile::Strict {
        for (field, value) in [
            ("description", &doc.description),
            ("version", &doc.version),
            ("author", &doc.author),
        ] {
            if value.is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }
    }

    if doc.commands.is_empty() {
        return Err(ValidationError::NoCommands);
    }

    for (i, cmd) in doc.commands.iter().enumerate() {
        let command = i + 1;
        if cmd.name.is_empty() {
            return Err(ValidationError::MissingCommandField {
                command,
                field: "name",
            });
        }
        if cmd.command_template.is_empty() {
            return Err(ValidationError::MissingCommandField {
                command,
                field: "command",
            });
        }

        for (j, var) in cmd.variables.iter().enumerate() {
            if var.name.is_empty() {
                return Err(ValidationError::MissingVariableName {
                    command,
                    variable: j + 1,
                });
            }
            if var.label.is_empty() {
                return Err(ValidationError::MissingVariableLabel {
                    command,
                    name: var.name.clone(),
                });
            }
            if !var.var_type.is_known() {
                return Err(ValidationError::UnknownVariableType {
                    command,
                    name: var.name.clone(),
                    var_type: var.var_type.to_string(),
                });
            }
        }
    }

    // Uniqueness runs as its own pass so field errors in any command are
    // reported before duplicates.
    for (i, cmd) in doc.commands.iter().enumerate() {
        let mut seen = HashSet::new();
        for var in &cmd.variables {
            if !seen.insert(var.name.as_str()) {
                return Err(ValidationError::DuplicateVariable {
                    command: i + 1,
                    name: var.name.clone(),
                });
            }
        }
    }

    if profile == Profile::Strict {
        for (i, cmd) in doc.commands.iter().enumerate() {
            for var in &cmd.variables {
                let placeholder = format!("{{{{{}}}}}", var.name);
                if !cmd.command_template.contains(&placeholder) {
                    return Err(ValidationError::UnreferencedVariable {
                        command: i + 1,
                        name: var.name.clone(),
                    });
                }
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
