//! Named placeholder substitution (`{player}` → `Steve`).

use std::borrow::Cow;
use std::fmt::Display;

/// Ordered set of placeholder replacements applied at resolve time.
///
/// # Examples
/// ```
/// use boujee::replace::Replacer;
///
/// let replacer = Replacer::new().with("player", "Steve").with("{count}", 3);
/// assert_eq!(replacer.apply("{player} has {count} lives"), "Steve has 3 lives");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replacer {
    /// `(placeholder with braces, replacement)` pairs in insertion order.
    replacements: Vec<(String, String)>,
}

impl Replacer {
    #[must_use]
    pub const fn new() -> Self {
        Self { replacements: Vec::new() }
    }

    /// Adds a replacement, wrapping `placeholder` in braces when needed.
    ///
    /// Setting the same placeholder again overrides the earlier value.
    #[must_use]
    pub fn with(mut self, placeholder: &str, replacement: impl Display) -> Self {
        self.set(placeholder, replacement);
        self
    }

    /// In-place form of [`Replacer::with`].
    pub fn set(&mut self, placeholder: &str, replacement: impl Display) {
        if placeholder.is_empty() {
            tracing::warn!("Ignoring replacement with an empty placeholder");
            return;
        }

        let placeholder = if placeholder.starts_with('{') && placeholder.ends_with('}') {
            placeholder.to_string()
        } else {
            format!("{{{placeholder}}}")
        };
        let replacement = replacement.to_string();

        if let Some(existing) = self.replacements.iter_mut().find(|(p, _)| *p == placeholder) {
            existing.1 = replacement;
        } else {
            self.replacements.push((placeholder, replacement));
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    /// Substitutes every placeholder occurring in `content`.
    ///
    /// Placeholders without a replacement are left as written. Returns the
    /// input unchanged (borrowed) when nothing matched.
    #[must_use]
    pub fn apply<'a>(&self, content: &'a str) -> Cow<'a, str> {
        let mut result = Cow::Borrowed(content);
        for (placeholder, replacement) in &self.replacements {
            if result.contains(placeholder.as_str()) {
                result = Cow::Owned(result.replace(placeholder.as_str(), replacement));
            }
        }
        result
    }
}

impl<K, V> FromIterator<(K, V)> for Replacer
where
    K: AsRef<str>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut replacer = Self::new();
        for (placeholder, replacement) in iter {
            replacer.set(placeholder.as_ref(), replacement);
        }
        replacer
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::bare_name("name", "Hello {name}!", "Hello Steve!")]
    #[case::braced_name("{name}", "Hello {name}!", "Hello Steve!")]
    #[case::repeated("name", "{name}, {name}", "Steve, Steve")]
    #[case::unknown_left_alone("name", "Hello {other}", "Hello {other}")]
    fn test_apply(#[case] placeholder: &str, #[case] content: &str, #[case] expected: &str) {
        let replacer = Replacer::new().with(placeholder, "Steve");

        assert_that!(replacer.apply(content).into_owned(), eq(expected));
    }

    #[rstest]
    fn test_apply_borrows_when_nothing_matches() {
        let replacer = Replacer::new().with("name", "Steve");

        assert!(matches!(replacer.apply("no placeholders"), Cow::Borrowed(_)));
    }

    #[googletest::test]
    fn test_set_overrides_previous_value() {
        let replacer = Replacer::new().with("n", 1).with("{n}", 2);

        expect_that!(replacer.len(), eq(1));
        expect_that!(replacer.apply("{n}").into_owned(), eq("2"));
    }

    #[rstest]
    fn test_empty_placeholder_is_ignored() {
        let replacer = Replacer::new().with("", "x");

        assert_that!(replacer.is_empty(), eq(true));
    }

    #[rstest]
    fn test_from_iterator() {
        let replacer: Replacer = [("a", "1"), ("b", "2")].into_iter().collect();

        assert_that!(replacer.apply("{a}{b}").into_owned(), eq("12"));
    }
}
