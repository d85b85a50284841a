//! Locale identifiers parsed from file names and configuration.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors raised while parsing a locale tag.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("Locale tag must not be empty")]
    Empty,

    #[error("Invalid language subtag '{subtag}' in locale '{tag}': expected 2-3 ASCII letters")]
    InvalidLanguage { tag: String, subtag: String },

    #[error(
        "Invalid region subtag '{subtag}' in locale '{tag}': expected 2 ASCII letters or 3 digits"
    )]
    InvalidRegion { tag: String, subtag: String },

    #[error("Unexpected subtag '{subtag}' in locale '{tag}'")]
    UnexpectedSubtag { tag: String, subtag: String },
}

/// A language with an optional region, e.g. `en_US` or `pl`.
///
/// The language is stored lower case and the region upper case, so `EN-us`
/// and `en_US` are the same locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleSource {
    language: String,
    region: Option<String>,
}

impl LocaleSource {
    /// Parses a tag such as `en_US`, `en-US` or `en`.
    ///
    /// # Examples
    /// ```
    /// use boujee::locale::LocaleSource;
    ///
    /// let locale = LocaleSource::parse("pl-pl").unwrap();
    /// assert_eq!(locale.language(), "pl");
    /// assert_eq!(locale.region(), Some("PL"));
    /// assert_eq!(locale.to_string(), "pl_PL");
    /// ```
    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(LocaleError::Empty);
        }

        let mut subtags = trimmed.split(['_', '-']);
        let language = subtags.next().unwrap_or_default();
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(LocaleError::InvalidLanguage {
                tag: tag.to_string(),
                subtag: language.to_string(),
            });
        }

        let region = match subtags.next() {
            None => None,
            Some(region) if is_region(region) => Some(region.to_ascii_uppercase()),
            Some(region) => {
                return Err(LocaleError::InvalidRegion {
                    tag: tag.to_string(),
                    subtag: region.to_string(),
                });
            }
        };

        if let Some(extra) = subtags.next() {
            return Err(LocaleError::UnexpectedSubtag {
                tag: tag.to_string(),
                subtag: extra.to_string(),
            });
        }

        Ok(Self { language: language.to_ascii_lowercase(), region })
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

/// Two letters (ISO 3166) or three digits (UN M.49).
fn is_region(subtag: &str) -> bool {
    match subtag.len() {
        2 => subtag.chars().all(|c| c.is_ascii_alphabetic()),
        3 => subtag.chars().all(|c| c.is_ascii_digit()),
        _ => false,
    }
}

impl fmt::Display for LocaleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}_{region}", self.language),
            None => f.write_str(&self.language),
        }
    }
}

impl FromStr for LocaleSource {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
