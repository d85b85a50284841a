//! Translation content: single texts and multi-line messages.

use std::borrow::Cow;

use thiserror::Error;

use crate::replace::Replacer;

/// Why a value cannot become translation content.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentError {
    #[error("text must not be blank")]
    BlankText,

    #[error("message must contain at least one line")]
    EmptyMessage,
}

/// A single, non-blank translated string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Text(String);

impl Text {
    pub fn new(content: impl Into<String>) -> Result<Self, ContentError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ContentError::BlankText);
        }
        Ok(Self(content))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitutes placeholders from `replacer`.
    #[must_use]
    pub fn render(&self, replacer: &Replacer) -> String {
        replacer.apply(&self.0).into_owned()
    }
}

/// An ordered, non-empty list of translated lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message(Vec<String>);

impl Message {
    pub fn new(lines: Vec<String>) -> Result<Self, ContentError> {
        if lines.is_empty() {
            return Err(ContentError::EmptyMessage);
        }
        Ok(Self(lines))
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.0
    }

    /// Substitutes placeholders in every line.
    #[must_use]
    pub fn render_lines(&self, replacer: &Replacer) -> Vec<String> {
        self.0.iter().map(|line| replacer.apply(line).into_owned()).collect()
    }

    /// Substitutes placeholders and joins the lines with `separator`.
    #[must_use]
    pub fn render(&self, replacer: &Replacer, separator: &str) -> String {
        self.0
            .iter()
            .map(|line| replacer.apply(line))
            .collect::<Vec<Cow<'_, str>>>()
            .join(separator)
    }
}

/// Either kind of translation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Text(Text),
    Message(Message),
}

impl From<Text> for Translation {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<Message> for Translation {
    fn from(message: Message) -> Self {
        Self::Message(message)
    }
}
