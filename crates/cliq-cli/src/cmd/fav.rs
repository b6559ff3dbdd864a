use crate::output::{print_json, print_table, print_yaml};
use anyhow::Context;
use clap::Subcommand;
use cliq_core::{paths, FavoritesStore, Profile};
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum FavSubcommand {
    /// Validate a cliqfile and save it as a favorite
    Save { file: PathBuf },
    /// List favorite templates
    List,
    /// Print a favorite template
    Show { name: String },
    /// Delete a favorite template
    Delete { name: String },
    /// Rename a favorite template
    Rename { old: String, new: String },
    /// Print the file a favorite is stored in
    Path { name: String },
}

pub fn run(root: &Path, subcmd: FavSubcommand, json: bool) -> anyhow::Result<()> {
    let store = FavoritesStore::open(root);
    match subcmd {
        FavSubcommand::Save { file } => save(&store, &file, json),
        FavSubcommand::List => list(&store, json),
        FavSubcommand::Show { name } => show(&store, &name, json),
        FavSubcommand::Delete { name } => delete(&store, &name, json),
        FavSubcommand::Rename { old, new } => rename(&store, &old, &new, json),
        FavSubcommand::Path { name } => path(&store, &name, json),
    }
}

fn save(store: &FavoritesStore, file: &Path, json: bool) -> anyhow::Result<()> {
    let doc = super::load_template(file, Profile::Standard)?;
    let path = store
        .save(&doc)
        .with_context(|| format!("failed to save favorite '{}'", doc.name))?;

    if json {
        print_json(&serde_json::json!({
            "name": doc.name,
            "path": path.display().to_string(),
        }))?;
    } else {
        println!("Saved favorite: {}", doc.name);
    }
    Ok(())
}

fn list(store: &FavoritesStore, json: bool) -> anyhow::Result<()> {
    let docs = store.list().context("failed to list favorites")?;

    if json {
        let summaries: Vec<_> = docs
            .iter()
            .map(|d| {
                serde_json::json!({
                    "name": d.name,
                    "description": d.description,
                    "version": d.version,
                    "author": d.author,
                    "commands": d.commands.len(),
                })
            })
            .collect();
        print_json(&summaries)?;
        return Ok(());
    }

    if docs.is_empty() {
        println!("No favorites yet.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = docs
        .iter()
        .map(|d| {
            vec![
                d.name.clone(),
                d.version.clone(),
                d.commands.len().to_string(),
                d.description.clone(),
            ]
        })
        .collect();
    print_table(&["NAME", "VERSION", "COMMANDS", "DESCRIPTION"], rows);
    Ok(())
}

fn show(store: &FavoritesStore, name: &str, json: bool) -> anyhow::Result<()> {
    let doc = store
        .get(name)
        .with_context(|| format!("failed to load favorite '{name}'"))?;
    if json {
        print_json(&doc)?;
    } else {
        print_yaml(&doc.to_yaml()?);
    }
    Ok(())
}

fn delete(store: &FavoritesStore, name: &str, json: bool) -> anyhow::Result<()> {
    store
        .delete(name)
        .with_context(|| format!("failed to delete favorite '{name}'"))?;
    if json {
        print_json(&serde_json::json!({ "name": name, "deleted": true }))?;
    } else {
        println!("Deleted favorite: {name}");
    }
    Ok(())
}

fn rename(store: &FavoritesStore, old: &str, new: &str, json: bool) -> anyhow::Result<()> {
    let mut doc = store
        .get(old)
        .with_context(|| format!("failed to load favorite '{old}'"))?;
    doc.name = new.to_string();
    doc.validate(Profile::Standard)
        .with_context(|| format!("favorite '{old}' is not a valid template"))?;
    store
        .rename(old, new, &doc)
        .with_context(|| format!("failed to rename favorite '{old}' to '{new}'"))?;

    if json {
        print_json(&serde_json::json!({ "from": old, "to": new }))?;
    } else {
        println!("Renamed favorite: {old} -> {new}");
    }
    Ok(())
}

fn path(store: &FavoritesStore, name: &str, json: bool) -> anyhow::Result<()> {
    let resolved = store
        .resolve(name)
        .with_context(|| format!("favorite not found: {name}"))?;
    let file_name = resolved
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();

    if json {
        print_json(&serde_json::json!({
            "name": name,
            "path": resolved.display().to_string(),
            "legacy": !paths::is_hashed_file_name(&file_name),
        }))?;
    } else {
        println!("{}", resolved.display());
    }
    Ok(())
}
