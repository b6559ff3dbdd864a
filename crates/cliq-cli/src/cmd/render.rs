use crate::output::print_json;
use anyhow::{bail, Context};
use clap::Args;
use cliq_core::render::Values;
use cliq_core::{FavoritesStore, Session};
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct RenderArgs {
    /// Cliqfile to load
    #[arg(required_unless_present = "fav", conflicts_with = "fav")]
    file: Option<PathBuf>,

    /// Load a favorite template by name instead of a file
    #[arg(long)]
    fav: Option<String>,

    /// Command id (may be omitted when the template has a single command)
    #[arg(long = "cmd")]
    command_id: Option<String>,

    /// Variable value, repeatable
    #[arg(long = "var", value_name = "NAME=VALUE")]
    vars: Vec<String>,
}

/// Load the requested template into a fresh session and pick the command.
fn prepare(root: &Path, args: &RenderArgs) -> anyhow::Result<(Session, String, Values)> {
    let mut session = Session::new(FavoritesStore::open(root));
    let doc = match (&args.file, &args.fav) {
        (_, Some(name)) => session
            .load_favorite(name)
            .with_context(|| format!("failed to load favorite '{name}'"))?,
        (Some(file), None) => session
            .import_file(file)
            .with_context(|| format!("failed to load '{}'", file.display()))?,
        (None, None) => bail!("a template file or --fav NAME is required"),
    };

    let command_id = match &args.command_id {
        Some(id) => id.clone(),
        None if doc.commands.len() == 1 => doc.commands[0].id.clone(),
        None => {
            let ids: Vec<_> = doc.commands.iter().map(|c| c.id.as_str()).collect();
            bail!("template has several commands; pick one with --cmd ({})", ids.join(", "))
        }
    };

    let mut values = Values::new();
    for raw in &args.vars {
        let (name, value) = super::parse_var(raw)?;
        values.insert(name, Value::String(value));
    }
    Ok((session, command_id, values))
}

pub fn preview(root: &Path, args: RenderArgs, json: bool) -> anyhow::Result<()> {
    let (session, command_id, values) = prepare(root, &args)?;
    let argv = session
        .render(&command_id, &values)
        .with_context(|| format!("failed to render command '{command_id}'"))?;

    if json {
        print_json(&serde_json::json!({
            "command": command_id,
            "argv": argv,
            "text": argv.join(" "),
        }))?;
    } else {
        println!("{}", argv.join(" "));
    }
    Ok(())
}

pub fn run(root: &Path, args: RenderArgs, json: bool) -> anyhow::Result<()> {
    let (session, command_id, values) = prepare(root, &args)?;
    let output = session
        .run(&command_id, &values)
        .with_context(|| format!("failed to run command '{command_id}'"))?;

    if json {
        print_json(&serde_json::json!({
            "command": command_id,
            "output": output,
        }))?;
    } else if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
