use crate::output::{print_json, print_yaml};
use anyhow::Context;
use cliq_core::infer::infer_template;
use std::path::Path;

pub fn run(
    command: &str,
    name: Option<String>,
    output: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let mut doc = infer_template(command).context("failed to infer template")?;
    if let Some(name) = name {
        doc.name = name;
    }

    if let Some(path) = output {
        doc.export_file(path)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        if json {
            print_json(&serde_json::json!({
                "path": path.display().to_string(),
                "variables": doc.commands[0].variables.len(),
            }))?;
        } else {
            println!(
                "Wrote {} ({} variables)",
                path.display(),
                doc.commands[0].variables.len()
            );
        }
        return Ok(());
    }

    if json {
        print_json(&doc)?;
    } else {
        print_yaml(&doc.to_yaml()?);
    }
    Ok(())
}
