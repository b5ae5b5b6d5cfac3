//! Placeholder matching.

use crate::LanguageMap;
use lexicon_common::{LexiconError, Result};
use lexicon_config::Delimiters;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Compiled placeholder pattern: `left` + ASCII word characters + `right`.
///
/// Names are limited to `[0-9A-Za-z_]`, so `{#名前}` is never substituted.
#[derive(Debug, Clone)]
pub struct Placeholder {
    regex: Regex,
}

impl Placeholder {
    /// Compiles the pattern for `delimiters`.
    ///
    /// Delimiters are matched literally; empty delimiters are rejected.
    pub fn new(delimiters: &Delimiters) -> Result<Self> {
        delimiters.validate()?;
        let pattern = format!(
            r"{}((?-u:\w)+){}",
            regex::escape(&delimiters.left),
            regex::escape(&delimiters.right)
        );
        let regex = Regex::new(&pattern).map_err(|e| LexiconError::config(e.to_string()))?;

        Ok(Self { regex })
    }

    /// Regular expression source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Replaces every placeholder whose name is a key in `values`.
    /// Unknown placeholders are left verbatim.
    pub fn replace<'a>(&self, content: &'a str, values: &LanguageMap) -> Cow<'a, str> {
        self.regex.replace_all(content, |caps: &Captures<'_>| {
            values
                .get(&caps[1])
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
    }
}

impl Default for Placeholder {
    fn default() -> Self {
        Self::new(&Delimiters::default()).expect("default delimiters are valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> LanguageMap {
        [("name", "Alice"), ("place", "Wonderland")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_pattern() {
        let placeholder = Placeholder::default();
        assert_eq!(
            placeholder.replace("Hello {#name} from {#place}!", &values()),
            "Hello Alice from Wonderland!"
        );
    }

    #[test]
    fn test_unknown_placeholder_kept() {
        let placeholder = Placeholder::default();
        assert_eq!(
            placeholder.replace("{#name} and {#missing}", &values()),
            "Alice and {#missing}"
        );
    }

    #[test]
    fn test_regex_metacharacters_are_escaped() {
        let placeholder = Placeholder::new(&Delimiters::new("[[", "]]")).unwrap();
        assert_eq!(placeholder.as_str(), r"\[\[((?-u:\w)+)\]\]");
        assert_eq!(placeholder.replace("Hi [[name]] {#name}", &values()), "Hi Alice {#name}");
    }

    #[test]
    fn test_names_are_ascii_words() {
        let placeholder = Placeholder::default();
        let mut values = values();
        values.insert("名前".to_string(), "Alice".to_string());
        assert_eq!(
            placeholder.replace("Hi {#名前} {#name_2} {#name}", &values),
            "Hi {#名前} {#name_2} Alice"
        );
    }

    #[test]
    fn test_no_placeholders_borrows() {
        let placeholder = Placeholder::default();
        assert!(matches!(placeholder.replace("plain", &values()), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_empty_delimiters_rejected() {
        assert!(Placeholder::new(&Delimiters::new("{#", "")).is_err());
    }
}
