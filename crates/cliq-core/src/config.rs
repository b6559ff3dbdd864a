use crate::error::{CliqError, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable that overrides `cliq_hub_base_url` on load.
pub const HUB_URL_ENV: &str = "CLIQ_CLIQ_HUB_BASE_URL";

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Application settings stored in `<config_root>/settings.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the template generation service.
    #[serde(default = "default_hub_base_url")]
    pub cliq_hub_base_url: String,
}

fn default_hub_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cliq_hub_base_url: default_hub_base_url(),
        }
    }
}

impl Settings {
    /// Load settings, writing the defaults first if the file is missing.
    /// `CLIQ_CLIQ_HUB_BASE_URL` takes precedence over the file.
    pub fn load(config_root: &Path) -> Result<Self> {
        let path = paths::settings_path(config_root);
        let mut settings = if path.exists() {
            let data = std::fs::read_to_string(&path)?;
            if data.trim().is_empty() {
                Settings::default()
            } else {
                serde_yaml::from_str(&data)?
            }
        } else {
            let defaults = Settings::default();
            defaults.write(config_root)?;
            defaults
        };

        if let Ok(url) = std::env::var(HUB_URL_ENV) {
            if !url.is_empty() {
                settings.cliq_hub_base_url = url;
            }
        }
        Ok(settings)
    }

    pub fn save(&self, config_root: &Path) -> Result<()> {
        self.validate()?;
        self.write(config_root)
    }

    /// Change the hub URL and persist it.
    pub fn set_hub_base_url(&mut self, config_root: &Path, url: &str) -> Result<()> {
        validate_url(url)?;
        self.cliq_hub_base_url = url.to_string();
        self.write(config_root)
    }

    pub fn validate(&self) -> Result<()> {
        validate_url(&self.cliq_hub_base_url)
    }

    fn write(&self, config_root: &Path) -> Result<()> {
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&paths::settings_path(config_root), data.as_bytes())
    }
}

fn validate_url(raw: &str) -> Result<()> {
    let invalid = |reason: String| CliqError::InvalidSetting {
        key: "cliq_hub_base_url",
        reason,
    };
    if raw.is_empty() {
        return Err(invalid("must not be empty".to_string()));
    }
    let parsed = url::Url::parse(raw).map_err(|e| invalid(format!("invalid URL: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("scheme must be http or https, got '{other}'"))),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
