//! Parser backends turning file content into a translation tree.

use std::path::Path;

use jsonc_parser::ParseOptions;
use serde_json::Value;

/// Deepest object/array nesting accepted by either backend.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Syntax a translation file is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Strict JSON (`.json` and anything unrecognized).
    Json,
    /// JSON with comments and trailing commas (`.jsonc`, `.json5`).
    Jsonc,
}

impl FileFormat {
    /// Picks the backend from the file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("jsonc") || ext.eq_ignore_ascii_case("json5") => {
                Self::Jsonc
            }
            _ => Self::Json,
        }
    }

    /// Parses `content` into a tree.
    ///
    /// Documents nested deeper than [`MAX_NESTING_DEPTH`] are rejected before
    /// either backend sees them.
    ///
    /// # Errors
    /// Returns a human-readable syntax error message.
    pub fn parse(self, content: &str) -> Result<Value, String> {
        check_nesting_depth(content)?;
        match self {
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Jsonc => {
                let value = jsonc_parser::parse_to_serde_value(content, &ParseOptions::default())
                    .map_err(|e| e.to_string())?;
                value.ok_or_else(|| "document is empty".to_string())
            }
        }
    }
}

/// Scans bracket depth outside strings and comments without recursing.
fn check_nesting_depth(content: &str) -> Result<(), String> {
    let mut depth = 0usize;
    let mut line = 1usize;
    let mut column = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\n' {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }

        if let Some(delimiter) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == delimiter {
                quote = None;
            }
            continue;
        }

        match c {
            '"' | '\'' => quote = Some(c),
            '{' | '[' => {
                depth += 1;
                if depth > MAX_NESTING_DEPTH {
                    return Err(format!(
                        "nesting deeper than {MAX_NESTING_DEPTH} levels at line {line} column {column}"
                    ));
                }
            }
            '}' | ']' => depth = depth.saturating_sub(1),
            '/' => match chars.peek() {
                Some('/') => {
                    for skipped in chars.by_ref() {
                        if skipped == '\n' {
                            line += 1;
                            column = 0;
                            break;
                        }
                    }
                }
                Some('*') => {
                    chars.next();
                    column += 1;
                    let mut previous = '\0';
                    for skipped in chars.by_ref() {
                        if skipped == '\n' {
                            line += 1;
                            column = 0;
                        } else {
                            column += 1;
                        }
                        if previous == '*' && skipped == '/' {
                            break;
                        }
                        previous = skipped;
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }
    Ok(())
}
