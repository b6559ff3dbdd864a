use crate::output::{print_json, print_yaml};
use anyhow::Context;
use cliq_core::codec::{sanitize_generated, Encoding};
use std::path::Path;

pub fn run(file: &Path, strict: bool, json: bool) -> anyhow::Result<()> {
    let doc = super::load_template(file, super::profile(strict))?;

    if json {
        print_json(&serde_json::json!({
            "valid": true,
            "name": doc.name,
            "commands": doc.commands.iter().map(|c| &c.id).collect::<Vec<_>>(),
        }))?;
    } else {
        let variables: usize = doc.commands.iter().map(|c| c.variables.len()).sum();
        println!(
            "Valid: {} ({} commands, {} variables)",
            doc.name,
            doc.commands.len(),
            variables
        );
    }
    Ok(())
}

pub fn sanitize(input: &str, encoding: &str, strict: bool, json: bool) -> anyhow::Result<()> {
    let encoding: Encoding = encoding.parse()?;
    let payload = super::read_input(input)?;
    let (yaml, doc) = sanitize_generated(&payload, encoding, super::profile(strict))
        .context("generated template rejected")?;

    if json {
        print_json(&doc)?;
    } else {
        print_yaml(&yaml);
    }
    Ok(())
}
