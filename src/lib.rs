//! boujee
//!
//! Locale-aware translation tables loaded from nested JSON files.
//!
//! Translation files are named after their locale (`en_US.json`,
//! `pl_PL.jsonc`, ...). Nested objects are flattened into upper-case,
//! underscore-joined keys; strings become texts and arrays of strings become
//! multi-line messages.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use boujee::{
//!     LocaleSource,
//!     Replacer,
//!     TranslationService,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut service = TranslationService::new(LocaleSource::parse("en_US")?);
//! boujee::input::fill(Path::new("languages"), &mut service)?;
//!
//! let pl = LocaleSource::parse("pl_PL")?;
//! let greeting = service.resolve("greeting", Some(&pl), &Replacer::new().with("name", "Steve"))?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod content;
pub mod flatten;
pub mod input;
pub mod key;
pub mod locale;
pub mod replace;
pub mod service;
mod test_utils;

pub use catalog::LocaleTranslations;
pub use content::{
    Message,
    Text,
    Translation,
};
pub use key::TranslationKey;
pub use locale::LocaleSource;
pub use replace::Replacer;
pub use service::{
    ResolveError,
    TranslationService,
};
