pub mod config;
pub mod fav;
pub mod infer;
pub mod render;
pub mod validate;

use anyhow::{bail, Context};
use cliq_core::{Profile, TemplateDocument};
use std::path::Path;

/// Read a file, or stdin when `input` is `-`.
pub fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        return std::io::read_to_string(std::io::stdin()).context("failed to read stdin");
    }
    std::fs::read_to_string(input).with_context(|| format!("failed to read '{input}'"))
}

/// Parse and validate a cliqfile from disk.
pub fn load_template(path: &Path, profile: Profile) -> anyhow::Result<TemplateDocument> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    TemplateDocument::parse_and_validate(&data, profile)
        .with_context(|| format!("invalid template '{}'", path.display()))
}

pub fn profile(strict: bool) -> Profile {
    if strict {
        Profile::Strict
    } else {
        Profile::Standard
    }
}

/// Split `NAME=VALUE`. The value may itself contain '='.
pub fn parse_var(raw: &str) -> anyhow::Result<(String, String)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => bail!("invalid variable '{raw}': expected NAME=VALUE"),
    }
}
