//! Loader type definitions.

use std::path::PathBuf;

use thiserror::Error;

use crate::flatten::FlattenError;
use crate::locale::LocaleError;

/// Errors raised while discovering and decoding translation files.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Translation root not found: {root}")]
    RootNotFound { root: String },

    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed input in '{}': {message}", path.display())]
    MalformedInput { path: PathBuf, message: String },

    #[error("Cannot derive locale from '{}': {source}", path.display())]
    Locale {
        path: PathBuf,
        #[source]
        source: LocaleError,
    },

    #[error("Invalid translations in '{}': {source}", path.display())]
    Flatten {
        path: PathBuf,
        #[source]
        source: FlattenError,
    },

    #[error("Translation file for locale '{name}' not found in {root}")]
    LocaleNotFound { name: String, root: String },

    #[error("Invalid file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}
