//! Library settings and their validation.
mod loader;
mod types;

pub use loader::load_from_file;
pub use types::{
    ConfigError,
    Settings,
    TranslationFilesConfig,
    ValidationError,
};
