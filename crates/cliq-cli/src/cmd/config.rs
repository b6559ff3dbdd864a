use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use cliq_core::config::Settings;
use cliq_core::paths;
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show current settings and storage locations
    Show,
    /// Set the template generation service URL
    SetHubUrl { url: String },
}

pub fn run(root: &Path, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(root, json),
        ConfigSubcommand::SetHubUrl { url } => set_hub_url(root, &url, json),
    }
}

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let settings = Settings::load(root).context("failed to load settings")?;
    let favorites = paths::favorites_dir(root);

    if json {
        print_json(&serde_json::json!({
            "config_dir": root.display().to_string(),
            "favorites_dir": favorites.display().to_string(),
            "cliq_hub_base_url": settings.cliq_hub_base_url,
        }))?;
    } else {
        println!("Config dir:    {}", root.display());
        println!("Favorites dir: {}", favorites.display());
        println!("Hub URL:       {}", settings.cliq_hub_base_url);
    }
    Ok(())
}

fn set_hub_url(root: &Path, url: &str, json: bool) -> anyhow::Result<()> {
    let mut settings = Settings::load(root).context("failed to load settings")?;
    settings
        .set_hub_base_url(root, url)
        .with_context(|| format!("cannot set hub URL to '{url}'"))?;

    if json {
        print_json(&serde_json::json!({ "cliq_hub_base_url": url }))?;
    } else {
        println!("Hub URL set to {url}");
    }
    Ok(())
}
