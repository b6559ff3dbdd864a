use anyhow::Context;
use std::path::{Path, PathBuf};

/// Resolve the cliq configuration root.
///
/// Priority:
/// 1. `--config-dir` flag / `CLIQ_CONFIG_DIR` env var (passed in as `explicit`)
/// 2. `~/.config/cliq`
pub fn resolve_config_root(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(p) = explicit {
        return Ok(p.to_path_buf());
    }
    cliq_core::paths::default_config_root().context("cannot locate the cliq config directory")
}
