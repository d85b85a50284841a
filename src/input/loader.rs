//! Translation file discovery and decoding.

use std::path::Path;

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};

use super::format::FileFormat;
use super::source::ResourceRoot;
use super::LoadError;
use crate::catalog::LocaleTranslations;
use crate::config::Settings;
use crate::flatten::flatten;
use crate::locale::LocaleSource;
use crate::service::TranslationService;

/// Finds translation files under a [`ResourceRoot`] and decodes them into
/// [`LocaleTranslations`].
#[derive(Debug, Clone)]
pub struct TranslationLoader {
    /// `None` accepts every file.
    include: Option<GlobSet>,
    exclude: GlobSet,
}

impl TranslationLoader {
    /// Builds a loader from the file filters in `settings`.
    ///
    /// # Errors
    /// Returns [`LoadError::InvalidPattern`] if a glob does not compile.
    pub fn new(settings: &Settings) -> Result<Self, LoadError> {
        let include = build_glob_set(std::slice::from_ref(&settings.translation_files.file_pattern))?;
        let exclude = build_glob_set(&settings.exclude_patterns)?;

        Ok(Self { include: Some(include), exclude })
    }

    /// Whether a root-relative path passes the include and exclude filters.
    #[must_use]
    pub fn is_translation_file(&self, relative: &Path) -> bool {
        self.include.as_ref().is_none_or(|include| include.is_match(relative))
            && !self.exclude.is_match(relative)
    }

    /// Decodes every matching file under `root`.
    ///
    /// Fails on the first file that cannot be decoded; no partial result is
    /// returned.
    ///
    /// # Errors
    /// See [`LoadError`]. Every file-level variant names the offending file.
    pub fn load_all<R: ResourceRoot + ?Sized>(
        &self,
        root: &R,
    ) -> Result<Vec<LocaleTranslations>, LoadError> {
        tracing::debug!(root = %root.describe(), "Loading all translations");

        let translations = root
            .list_files()?
            .iter()
            .filter(|relative| self.is_translation_file(relative))
            .map(|relative| decode_file(root, relative))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(root = %root.describe(), count = translations.len(), "Loaded translations");
        Ok(translations)
    }

    /// Decodes the first matching file whose name contains `name`.
    ///
    /// # Errors
    /// [`LoadError::LocaleNotFound`] when no file name contains `name`, or any
    /// error raised while decoding the chosen file.
    pub fn load<R: ResourceRoot + ?Sized>(
        &self,
        root: &R,
        name: &str,
    ) -> Result<LocaleTranslations, LoadError> {
        let files = root.list_files()?;
        let Some(relative) = files.iter().find(|relative| {
            self.is_translation_file(relative)
                && relative
                    .file_name()
                    .is_some_and(|file_name| file_name.to_string_lossy().contains(name))
        }) else {
            return Err(LoadError::LocaleNotFound {
                name: name.to_string(),
                root: root.describe(),
            });
        };

        decode_file(root, relative)
    }

    /// Loads every matching file under `root` into `service`.
    ///
    /// Returns the number of locales installed. Nothing is installed if any
    /// file fails to decode.
    ///
    /// # Errors
    /// Same as [`TranslationLoader::load_all`].
    pub fn fill<R: ResourceRoot + ?Sized>(
        &self,
        root: &R,
        service: &mut TranslationService,
    ) -> Result<usize, LoadError> {
        let translations = self.load_all(root)?;
        let count = translations.len();
        service.update_translations(translations);

        tracing::info!(root = %root.describe(), locales = count, "Installed translations");
        Ok(count)
    }
}

impl Default for TranslationLoader {
    fn default() -> Self {
        Self { include: None, exclude: GlobSet::empty() }
    }
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet, LoadError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|source| LoadError::InvalidPattern { pattern: pattern.clone(), source })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|source| LoadError::InvalidPattern { pattern: patterns.join(", "), source })
}

fn decode_file<R: ResourceRoot + ?Sized>(
    root: &R,
    relative: &Path,
) -> Result<LocaleTranslations, LoadError> {
    let stem = relative.file_stem().map(|stem| stem.to_string_lossy()).unwrap_or_default();
    let locale = LocaleSource::parse(&stem)
        .map_err(|source| LoadError::Locale { path: relative.to_path_buf(), source })?;

    let content = root.read_to_string(relative)?;
    let format = FileFormat::from_path(relative);
    let tree = format.parse(&content).map_err(|message| LoadError::MalformedInput {
        path: relative.to_path_buf(),
        message,
    })?;

    let flat = flatten(&tree)
        .map_err(|source| LoadError::Flatten { path: relative.to_path_buf(), source })?;

    tracing::debug!(
        file = %relative.display(),
        locale = %locale,
        ?format,
        keys = flat.len(),
        "Decoded translation file"
    );
    Ok(LocaleTranslations::new(locale, flat))
}
