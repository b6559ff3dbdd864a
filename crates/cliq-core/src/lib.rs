pub mod codec;
pub mod config;
pub mod error;
pub mod exec;
pub mod favorites;
pub mod infer;
pub mod io;
pub mod paths;
pub mod render;
pub mod session;
pub mod template;
pub mod types;
pub mod validate;

pub use error::{CliqError, Result, ValidationError};
pub use favorites::FavoritesStore;
pub use session::Session;
pub use template::{Command, TemplateDocument, VariableDefinition};
pub use types::VariableType;
pub use validate::Profile;
