//! Reading translation files from disk or from embedded assets.
mod format;
mod loader;
mod source;
mod types;

use std::path::Path;

pub use format::{
    FileFormat,
    MAX_NESTING_DEPTH,
};
pub use loader::TranslationLoader;
pub use source::{
    EmbeddedRoot,
    FsRoot,
    ResourceRoot,
};
pub use types::LoadError;

use crate::catalog::LocaleTranslations;
use crate::service::TranslationService;

/// Decodes every file under the directory `root` with the default filters.
///
/// # Errors
/// See [`TranslationLoader::load_all`].
pub fn load_all(root: &Path) -> Result<Vec<LocaleTranslations>, LoadError> {
    TranslationLoader::default().load_all(&FsRoot::new(root))
}

/// Decodes the first file under the directory `root` whose name contains
/// `name`.
///
/// # Errors
/// See [`TranslationLoader::load`].
pub fn load(root: &Path, name: &str) -> Result<LocaleTranslations, LoadError> {
    TranslationLoader::default().load(&FsRoot::new(root), name)
}

/// Loads every file under the directory `root` into `service`.
///
/// # Errors
/// See [`TranslationLoader::fill`].
pub fn fill(root: &Path, service: &mut TranslationService) -> Result<usize, LoadError> {
    TranslationLoader::default().fill(&FsRoot::new(root), service)
}
