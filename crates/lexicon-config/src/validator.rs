//! Settings validation.

use crate::schema::{Delimiters, Settings};
use lexicon_common::{LexiconError, Result};

impl Delimiters {
    /// Rejects empty markers, which would turn every word into a placeholder.
    pub fn validate(&self) -> Result<()> {
        if self.left.is_empty() || self.right.is_empty() {
            return Err(LexiconError::InvalidDelimiters {
                left: self.left.clone(),
                right: self.right.clone(),
            });
        }
        Ok(())
    }
}

impl Settings {
    /// Validates the settings.
    ///
    /// A missing `path` is not an error; it only means nothing is translated.
    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(LexiconError::config("language cannot be empty"));
        }
        self.delimiters.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_empty_language_rejected() {
        let settings = Settings {
            language: "  ".to_string(),
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(LexiconError::Config(_))));
    }

    #[test]
    fn test_empty_delimiter_rejected() {
        let delimiters = Delimiters::new("", "}");
        assert!(matches!(
            delimiters.validate(),
            Err(LexiconError::InvalidDelimiters { .. })
        ));
    }

    #[test]
    fn test_missing_path_is_valid() {
        let settings = Settings {
            path: "does/not/exist".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());
    }
}
