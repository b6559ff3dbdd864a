//! On-disk store for a user's favorite templates.
//!
//! Each favorite is one YAML file in the favorites directory named after the
//! MD5 of the template name (`<hash>.cliqfile.yaml`). Files written before
//! names were hashed used the raw name (`<name>.cliqfile.yaml`); lookups try
//! the hashed name first, then the raw name, each with both `.yaml` and
//! `.yml` suffixes. Listing only picks up hash-named files.
//!
//! The store does not validate documents; callers validate before use.

use crate::error::{CliqError, Result};
use crate::io::{atomic_write, ensure_dir};
use crate::paths::{self, CLIQFILE_SUFFIXES, CLIQFILE_YAML};
use crate::template::TemplateDocument;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FavoritesStore {
    dir: PathBuf,
}

impl FavoritesStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at `<config_root>/fav_templates`.
    pub fn open(config_root: &Path) -> Self {
        Self::new(paths::favorites_dir(config_root))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where `save` writes the favorite called `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(paths::hashed_file_name(name, CLIQFILE_YAML))
    }

    fn candidates(&self, name: &str) -> Vec<PathBuf> {
        let hashed = CLIQFILE_SUFFIXES
            .iter()
            .map(|suffix| self.dir.join(paths::hashed_file_name(name, suffix)));
        let legacy = CLIQFILE_SUFFIXES
            .iter()
            .filter_map(|suffix| paths::legacy_file_name(name, suffix))
            .map(|file| self.dir.join(file));
        hashed.chain(legacy).collect()
    }

    /// Existing file for `name`, hashed scheme first, then legacy.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        let found = self.candidates(name).into_iter().find(|p| p.is_file())?;
        let file_name = found.file_name()?.to_string_lossy();
        if !paths::is_hashed_file_name(&file_name) {
            tracing::debug!(name, file = %file_name, "resolved favorite via legacy file name");
        }
        Some(found)
    }

    fn require(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty() {
            return Err(CliqError::EmptyInput("template name"));
        }
        self.resolve(name)
            .ok_or_else(|| CliqError::NotFound(name.to_string()))
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Write `doc` under the hashed name of `doc.name`, replacing any
    /// previous favorite with the same name.
    pub fn save(&self, doc: &TemplateDocument) -> Result<PathBuf> {
        if doc.name.is_empty() {
            return Err(CliqError::EmptyInput("template name"));
        }
        ensure_dir(&self.dir)?;
        let path = self.path_for(&doc.name);
        atomic_write(&path, doc.to_yaml()?.as_bytes())?;
        Ok(path)
    }

    /// Every hash-named favorite that parses, sorted by template name.
    /// Unreadable or malformed files are skipped with a warning.
    pub fn list(&self) -> Result<Vec<TemplateDocument>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut docs = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if !paths::is_hashed_file_name(&file_name) {
                tracing::debug!(file = %file_name, "skipping non-hashed file in favorites");
                continue;
            }
            match read_document(&entry.path()) {
                Ok(doc) => docs.push(doc),
                Err(e) => {
                    tracing::warn!(file = %file_name, error = %e, "skipping unreadable favorite")
                }
            }
        }
        docs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(docs)
    }

    pub fn get(&self, name: &str) -> Result<TemplateDocument> {
        let path = self.require(name)?;
        read_document(&path).map_err(|e| match e {
            CliqError::EmptyInput(_) => CliqError::EmptyFile(name.to_string()),
            other => other,
        })
    }

    pub fn delete(&self, name: &str) -> Result<()> {
        let path = self.require(name)?;
        std::fs::remove_file(path)?;
        Ok(())
    }

    /// Overwrite the existing favorite `name` in place, whichever naming
    /// scheme it was stored under.
    pub fn update(&self, name: &str, doc: &TemplateDocument) -> Result<()> {
        let path = self.require(name)?;
        atomic_write(&path, doc.to_yaml()?.as_bytes())
    }

    /// Replace favorite `old_name` with `doc` stored under `new_name`.
    ///
    /// The new file is written and read back before the old one is removed,
    /// so an interruption leaves at least one copy on disk.
    pub fn rename(
        &self,
        old_name: &str,
        new_name: &str,
        doc: &TemplateDocument,
    ) -> Result<PathBuf> {
        if new_name.is_empty() {
            return Err(CliqError::EmptyInput("new template name"));
        }
        let old_path = self.require(old_name)?;
        if old_name == new_name {
            atomic_write(&old_path, doc.to_yaml()?.as_bytes())?;
            return Ok(old_path);
        }

        let new_path = self.path_for(new_name);
        atomic_write(&new_path, doc.to_yaml()?.as_bytes())?;
        let written = read_document(&new_path)?;
        if &written != doc {
            return Err(CliqError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("verification of {} failed", new_path.display()),
            )));
        }
        if old_path != new_path {
            std::fs::remove_file(&old_path)?;
        }
        Ok(new_path)
    }
}

fn read_document(path: &Path) -> Result<TemplateDocument> {
    let data = std::fs::read_to_string(path)?;
    TemplateDocument::from_yaml(&data)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
