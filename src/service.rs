//! Runtime lookup of translations by key and locale.

use std::collections::HashMap;

use thiserror::Error;

use crate::catalog::LocaleTranslations;
use crate::config::{
    ConfigError,
    Settings,
};
use crate::content::{
    Message,
    Text,
};
use crate::locale::LocaleSource;
use crate::replace::Replacer;

/// Separator placed between message lines unless configured otherwise.
pub const DEFAULT_LINE_SEPARATOR: &str = "\n";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("No translation for key '{key}' in locale '{locale}' or the default locale")]
    TranslationNotFound { key: String, locale: String },
}

/// Holds translations for every loaded locale and resolves keys against them.
///
/// Lookups fall back to the default locale when the requested locale is not
/// loaded or lacks the key. Updates take `&mut self`; share the service behind
/// a lock if it must be reloaded while other threads resolve.
#[derive(Debug, Clone)]
pub struct TranslationService {
    translations: HashMap<LocaleSource, LocaleTranslations>,
    default_locale: LocaleSource,
    line_separator: String,
}

/// A translation found by [`TranslationService::find`].
#[derive(Debug, Clone, Copy)]
enum Found<'a> {
    Text(&'a Text),
    Message(&'a Message),
}

impl TranslationService {
    /// Creates an empty service.
    #[must_use]
    pub fn new(default_locale: LocaleSource) -> Self {
        Self {
            translations: HashMap::new(),
            default_locale,
            line_separator: DEFAULT_LINE_SEPARATOR.to_string(),
        }
    }

    /// Creates an empty service configured by `settings`.
    ///
    /// # Errors
    /// Returns [`ConfigError::ValidationErrors`] if the settings are invalid.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;
        let default_locale = settings.parsed_default_locale()?;

        Ok(Self {
            translations: HashMap::new(),
            default_locale,
            line_separator: settings.line_separator.clone(),
        })
    }

    /// Resolves `key` to display text.
    ///
    /// Messages are joined with the line separator. Placeholders in the
    /// result are replaced from `args`.
    ///
    /// # Errors
    /// [`ResolveError::TranslationNotFound`] when neither the requested nor
    /// the default locale has the key.
    pub fn resolve(
        &self,
        key: &str,
        locale: Option<&LocaleSource>,
        args: &Replacer,
    ) -> Result<String, ResolveError> {
        match self.find(key, locale) {
            Some(Found::Text(text)) => Ok(text.render(args)),
            Some(Found::Message(message)) => Ok(message.render(args, &self.line_separator)),
            None => {
                let locale = locale.unwrap_or(&self.default_locale);
                tracing::debug!(key, %locale, "Translation not found");
                Err(ResolveError::TranslationNotFound {
                    key: key.to_string(),
                    locale: locale.to_string(),
                })
            }
        }
    }

    /// Looks up a text without substituting placeholders.
    #[must_use]
    pub fn text(&self, key: &str, locale: Option<&LocaleSource>) -> Option<&Text> {
        self.candidates(locale).find_map(|translations| translations.text(key))
    }

    /// Looks up a message without substituting placeholders.
    #[must_use]
    pub fn message(&self, key: &str, locale: Option<&LocaleSource>) -> Option<&Message> {
        self.candidates(locale).find_map(|translations| translations.message(key))
    }

    /// Installs `translations`, replacing any locale that is already loaded.
    ///
    /// Locales absent from `translations` are kept. When the same locale
    /// appears twice, the later entry wins.
    pub fn update_translations(&mut self, translations: impl IntoIterator<Item = LocaleTranslations>) {
        for entry in translations {
            tracing::debug!(
                locale = %entry.locale(),
                texts = entry.number_of_texts(),
                messages = entry.number_of_messages(),
                "Updating locale"
            );
            self.translations.insert(entry.locale().clone(), entry);
        }
    }

    pub fn set_default_locale(&mut self, locale: LocaleSource) {
        self.default_locale = locale;
    }

    #[must_use]
    pub const fn default_locale(&self) -> &LocaleSource {
        &self.default_locale
    }

    pub fn set_line_separator(&mut self, separator: impl Into<String>) {
        self.line_separator = separator.into();
    }

    #[must_use]
    pub fn line_separator(&self) -> &str {
        &self.line_separator
    }

    /// Loaded locales in sorted order.
    #[must_use]
    pub fn locales(&self) -> Vec<&LocaleSource> {
        let mut locales: Vec<_> = self.translations.keys().collect();
        locales.sort();
        locales
    }

    #[must_use]
    pub fn locale_translations(&self, locale: &LocaleSource) -> Option<&LocaleTranslations> {
        self.translations.get(locale)
    }

    #[must_use]
    pub fn contains_locale(&self, locale: &LocaleSource) -> bool {
        self.translations.contains_key(locale)
    }

    #[must_use]
    pub fn number_of_locales(&self) -> usize {
        self.translations.len()
    }

    /// Drops every loaded locale. The default locale is kept.
    pub fn clear(&mut self) {
        self.translations.clear();
    }

    fn find(&self, key: &str, locale: Option<&LocaleSource>) -> Option<Found<'_>> {
        self.candidates(locale).find_map(|translations| {
            translations
                .text(key)
                .map(Found::Text)
                .or_else(|| translations.message(key).map(Found::Message))
        })
    }

    /// Tables to search in order: the requested locale (if loaded), then the
    /// default locale.
    fn candidates(
        &self,
        locale: Option<&LocaleSource>,
    ) -> impl Iterator<Item = &LocaleTranslations> {
        let requested = locale
            .filter(|locale| **locale != self.default_locale)
            .and_then(|locale| self.translations.get(locale));
        requested.into_iter().chain(self.translations.get(&self.default_locale))
    }
}
