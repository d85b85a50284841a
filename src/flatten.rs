//! Flattening of nested translation trees into key → translation maps.

use std::collections::HashMap;

use serde_json::{
    Map,
    Value,
};
use thiserror::Error;

use crate::content::{
    Message,
    Text,
    Translation,
};
use crate::key::{
    KeyError,
    TranslationKey,
};

/// Errors raised while flattening a translation tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlattenError {
    #[error("Unsupported root kind: expected an object, found {kind}")]
    UnsupportedRootKind { kind: &'static str },

    #[error("Invalid text value for key '{key}': {reason}")]
    InvalidTextValue { key: String, reason: String },

    #[error("Invalid message value for key '{key}': {reason}")]
    InvalidMessageValue { key: String, reason: String },

    #[error("Empty translation key under '{parent}'")]
    EmptyKey { parent: String },

    #[error("Invalid translation key '{segment}' under '{parent}': {source}")]
    InvalidKey {
        segment: String,
        parent: String,
        #[source]
        source: KeyError,
    },
}

/// Flat map produced from one translation tree.
pub type FlatTranslations = HashMap<TranslationKey, Translation>;

/// Flatten a nested translation tree into normalized keys.
///
/// Strings become [`Translation::Text`], arrays of strings become
/// [`Translation::Message`] and nested objects contribute their key as a
/// prefix. Any other value fails the whole tree.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use boujee::flatten::flatten;
///
/// let json = json!({
///     "menu": {
///         "title": "Main menu",
///         "help": ["Line one", "Line two"]
///     }
/// });
///
/// let flattened = flatten(&json).unwrap();
/// assert!(flattened.contains_key("MENU_TITLE"));
/// assert!(flattened.contains_key("MENU_HELP"));
/// ```
pub fn flatten(root: &Value) -> Result<FlatTranslations, FlattenError> {
    let Value::Object(map) = root else {
        return Err(FlattenError::UnsupportedRootKind { kind: value_kind(root) });
    };

    let mut result = HashMap::new();
    flatten_object(map, None, &mut result)?;
    Ok(result)
}

fn flatten_object(
    map: &Map<String, Value>,
    prefix: Option<&TranslationKey>,
    result: &mut FlatTranslations,
) -> Result<(), FlattenError> {
    for (segment, value) in map {
        let key = TranslationKey::nested(segment, prefix).map_err(|e| {
            let parent = prefix.map(ToString::to_string).unwrap_or_default();
            match e {
                KeyError::Empty => FlattenError::EmptyKey { parent },
                KeyError::Uncased => {
                    FlattenError::InvalidKey { segment: segment.clone(), parent, source: e }
                }
            }
        })?;

        match value {
            Value::Object(child) => flatten_object(child, Some(&key), result)?,
            Value::Array(items) => {
                let message = to_message(&key, items)?;
                result.insert(key, Translation::Message(message));
            }
            _ => {
                let text = to_text(&key, value)?;
                result.insert(key, Translation::Text(text));
            }
        }
    }
    Ok(())
}

fn to_text(key: &TranslationKey, value: &Value) -> Result<Text, FlattenError> {
    let Value::String(raw) = value else {
        return Err(FlattenError::InvalidTextValue {
            key: key.to_string(),
            reason: format!("expected a string, found {}", value_kind(value)),
        });
    };

    Text::new(raw.as_str()).map_err(|e| FlattenError::InvalidTextValue {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

fn to_message(key: &TranslationKey, items: &[Value]) -> Result<Message, FlattenError> {
    let mut lines = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Value::String(line) = item else {
            return Err(FlattenError::InvalidMessageValue {
                key: key.to_string(),
                reason: format!("element [{index}] is {}, expected a string", value_kind(item)),
            });
        };
        lines.push(line.clone());
    }

    Message::new(lines).map_err(|e| FlattenError::InvalidMessageValue {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
