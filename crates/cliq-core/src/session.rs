use crate::error::{CliqError, Result};
use crate::favorites::FavoritesStore;
use crate::render::{self, Values};
use crate::template::TemplateDocument;
use crate::validate::Profile;
use std::path::Path;

/// The template a user is currently working with, plus the favorites store
/// it can be loaded from. Each session owns its document; nothing is shared
/// between sessions.
#[derive(Debug, Clone)]
pub struct Session {
    favorites: FavoritesStore,
    current: Option<TemplateDocument>,
}

impl Session {
    pub fn new(favorites: FavoritesStore) -> Self {
        Self {
            favorites,
            current: None,
        }
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn current(&self) -> Option<&TemplateDocument> {
        self.current.as_ref()
    }

    /// Validate `doc` and make it the current template.
    pub fn load(&mut self, doc: TemplateDocument) -> Result<&TemplateDocument> {
        doc.validate(Profile::Standard)?;
        Ok(&*self.current.insert(doc))
    }

    pub fn import_file(&mut self, path: &Path) -> Result<&TemplateDocument> {
        let doc = TemplateDocument::import_file(path)?;
        Ok(&*self.current.insert(doc))
    }

    pub fn load_favorite(&mut self, name: &str) -> Result<&TemplateDocument> {
        let doc = self.favorites.get(name)?;
        self.load(doc)
    }

    fn require_current(&self) -> Result<&TemplateDocument> {
        self.current
            .as_ref()
            .ok_or(CliqError::EmptyInput("loaded template"))
    }

    /// Argument vector for command `command_id` of the current template.
    pub fn render(&self, command_id: &str, values: &Values) -> Result<Vec<String>> {
        let cmd = self.require_current()?.command(command_id)?;
        render::render_args(&cmd.command_template, values)
    }

    pub fn preview(&self, command_id: &str, values: &Values) -> Result<String> {
        Ok(self.render(command_id, values)?.join(" "))
    }

    /// Render and execute; returns the command's trimmed output.
    pub fn run(&self, command_id: &str, values: &Values) -> Result<String> {
        let argv = self.render(command_id, values)?;
        crate::exec::execute(&argv)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
