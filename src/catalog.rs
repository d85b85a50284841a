//! Per-locale translation tables.

use std::collections::HashMap;

use crate::content::{
    Message,
    Text,
    Translation,
};
use crate::flatten::FlatTranslations;
use crate::key::{
    TranslationKey,
    lookup_form,
};
use crate::locale::LocaleSource;

/// All texts and messages loaded from one translation file.
///
/// A key appears in at most one of the two tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTranslations {
    locale: LocaleSource,
    texts: HashMap<TranslationKey, Text>,
    messages: HashMap<TranslationKey, Message>,
}

impl LocaleTranslations {
    /// Partitions a flattened map into texts and messages.
    #[must_use]
    pub fn new(locale: LocaleSource, translations: FlatTranslations) -> Self {
        let mut texts = HashMap::new();
        let mut messages = HashMap::new();
        for (key, translation) in translations {
            match translation {
                Translation::Text(text) => {
                    texts.insert(key, text);
                }
                Translation::Message(message) => {
                    messages.insert(key, message);
                }
            }
        }
        Self { locale, texts, messages }
    }

    #[must_use]
    pub const fn locale(&self) -> &LocaleSource {
        &self.locale
    }

    /// Looks up a text; `key` is normalized before lookup.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&Text> {
        self.texts.get(&*lookup_form(key))
    }

    /// Looks up a message; `key` is normalized before lookup.
    #[must_use]
    pub fn message(&self, key: &str) -> Option<&Message> {
        self.messages.get(&*lookup_form(key))
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        let key = lookup_form(key);
        self.texts.contains_key(&*key) || self.messages.contains_key(&*key)
    }

    #[must_use]
    pub fn number_of_texts(&self) -> usize {
        self.texts.len()
    }

    #[must_use]
    pub fn number_of_messages(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty() && self.messages.is_empty()
    }

    /// Every key in this locale, texts first, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &TranslationKey> {
        self.texts.keys().chain(self.messages.keys())
    }
}
