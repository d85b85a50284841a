use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::locale::LocaleSource;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "excludePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Locale used when a requested locale or key is missing.
    pub default_locale: String,

    /// Placed between the lines of a multi-line message.
    pub line_separator: String,

    pub translation_files: TranslationFilesConfig,

    /// Files under the translation root matching any of these are skipped.
    pub exclude_patterns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationFilesConfig {
    /// Glob matched against paths relative to the translation root.
    pub file_pattern: String,
}

impl Settings {
    /// Parses the configured default locale.
    pub fn parsed_default_locale(&self) -> Result<LocaleSource, ConfigError> {
        LocaleSource::parse(&self.default_locale).map_err(|e| {
            ConfigError::ValidationErrors(vec![ValidationError::new(
                "defaultLocale",
                e.to_string(),
            )])
        })
    }

    /// # Errors
    /// - Default locale is not a valid locale tag
    /// - File pattern is empty
    /// - Invalid glob pattern
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = LocaleSource::parse(&self.default_locale) {
            errors.push(ValidationError::new(
                "defaultLocale",
                format!("{e}. Example: \"en_US\""),
            ));
        }

        if self.translation_files.file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "translationFiles.filePattern",
                "The pattern cannot be empty. Example: \"**/*.json\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.translation_files.file_pattern) {
            errors.push(ValidationError::new(
                "translationFiles.filePattern",
                format!("Invalid glob pattern '{}': {e}", self.translation_files.file_pattern),
            ));
        }

        for (index, pattern) in self.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for TranslationFilesConfig {
    fn default() -> Self {
        Self { file_pattern: "**/*".to_string() }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_locale: "en_US".to_string(),
            line_separator: "\n".to_string(),
            translation_files: TranslationFilesConfig::default(),
            exclude_patterns: Vec::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = Settings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"defaultLocale": "pl_PL", "excludePatterns": ["**/*.md"]}"#;

        let settings: Settings = serde_json::from_str(json).unwrap();

        assert_that!(settings.default_locale, eq("pl_PL"));
        assert_that!(settings.line_separator, eq("\n"));
        assert_that!(settings.exclude_patterns, elements_are![eq("**/*.md")]);
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let json = "{}";

        let settings: Settings = serde_json::from_str(json).unwrap();

        assert_that!(settings.default_locale, eq("en_US"));
        assert_that!(settings.translation_files.file_pattern, eq("**/*"));
        assert_that!(settings.exclude_patterns, is_empty());
    }

    #[rstest]
    fn parsed_default_locale_normalizes_tag() {
        let settings = Settings { default_locale: "pl-pl".to_string(), ..Settings::default() };

        let locale = settings.parsed_default_locale().unwrap();

        assert_that!(locale.to_string(), eq("pl_PL"));
    }

    #[rstest]
    fn validate_invalid_default_locale() {
        let settings = Settings { default_locale: "english".to_string(), ..Settings::default() };
        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("defaultLocale")),
                field!(ValidationError.message, contains_substring("english"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_translation_file_pattern_empty() {
        let settings = Settings {
            translation_files: TranslationFilesConfig { file_pattern: String::new() },
            ..Settings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("translationFiles.filePattern")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_exclude_pattern_invalid_glob() {
        let settings = Settings {
            exclude_patterns: vec!["**/*.md".to_string(), "invalid[pattern".to_string()],
            ..Settings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("excludePatterns[1]")),
                field!(ValidationError.message, contains_substring("Invalid glob pattern")),
                field!(ValidationError.message, contains_substring("invalid[pattern"))
            ]])
        );
    }

    #[rstest]
    fn config_error_validation_errors_format() {
        let settings = Settings {
            default_locale: String::new(),
            translation_files: TranslationFilesConfig { file_pattern: String::new() },
            ..Settings::default()
        };

        let validation_result = settings.validate();
        let errors = validation_result.unwrap_err();
        let config_error = ConfigError::ValidationErrors(errors);

        let error_message = format!("{config_error}");
        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. defaultLocale"));
        assert_that!(error_message, contains_substring("must not be empty"));
        assert_that!(error_message, contains_substring("2. translationFiles.filePattern"));
    }
}
