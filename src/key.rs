//! Translation keys and the path normalization convention.

use std::borrow::{
    Borrow,
    Cow,
};
use std::fmt;

use thiserror::Error;

/// Separator placed between normalized path segments.
pub const KEY_SEPARATOR: char = '_';

/// Errors raised while building a translation key.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyError {
    /// The key is empty after trimming.
    #[error("Translation key must not be empty")]
    Empty,

    /// The key keeps a lowercase character (e.g. `ª`) that has no upper-case
    /// form.
    #[error("Translation key contains a lowercase character with no upper-case form")]
    Uncased,
}

/// Normalized, hierarchical translation key (e.g. `MENU_TITLE`).
///
/// Keys are always upper case and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TranslationKey(String);

impl TranslationKey {
    /// Creates a key from caller-supplied text, trimming and upper-casing it.
    ///
    /// # Examples
    /// ```
    /// use boujee::key::TranslationKey;
    ///
    /// let key = TranslationKey::new(" menu_title ").unwrap();
    /// assert_eq!(key.as_str(), "MENU_TITLE");
    /// ```
    pub fn new(raw: &str) -> Result<Self, KeyError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(KeyError::Empty);
        }
        Self::checked(trimmed.to_uppercase())
    }

    /// Builds the key for `segment` nested under `parent`.
    pub fn nested(segment: &str, parent: Option<&Self>) -> Result<Self, KeyError> {
        let key = normalize(segment, parent.map_or("", Self::as_str));
        if key.is_empty() {
            return Err(KeyError::Empty);
        }
        Self::checked(key)
    }

    /// Rejects keys that kept a lowercase character through upper-casing.
    fn checked(key: String) -> Result<Self, KeyError> {
        if key.chars().any(char::is_lowercase) {
            return Err(KeyError::Uncased);
        }
        Ok(Self(key))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for TranslationKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for TranslationKey {
    type Error = KeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Joins an upper-cased `segment` onto `previous`.
///
/// The segment charset is not validated, so a segment that already contains
/// `_` is indistinguishable from two nested segments.
///
/// # Examples
/// ```
/// use boujee::key::normalize;
///
/// assert_eq!(normalize("title", ""), "TITLE");
/// assert_eq!(normalize("title", "MENU"), "MENU_TITLE");
/// ```
#[must_use]
pub fn normalize(segment: &str, previous: &str) -> String {
    let upper = segment.to_uppercase();
    if previous.is_empty() {
        return upper;
    }
    format!("{previous}{KEY_SEPARATOR}{upper}")
}

/// Converts lookup text into the form keys are stored in, borrowing when the
/// text is already normalized.
pub(crate) fn lookup_form(raw: &str) -> Cow<'_, str> {
    let trimmed = raw.trim();
    if trimmed.chars().any(char::is_lowercase) {
        Cow::Owned(trimmed.to_uppercase())
    } else {
        Cow::Borrowed(trimmed)
    }
}
