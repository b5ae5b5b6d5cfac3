//! Default values and default source discovery.

use crate::schema::{Delimiters, Settings};
use lexicon_common::path;
use tracing::debug;

/// Directory name searched for when no path is configured.
pub const DEFAULT_DIRECTORY: &str = "i18n";

/// Language used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default left placeholder delimiter.
pub const DEFAULT_LEFT_DELIMITER: &str = "{#";

/// Default right placeholder delimiter.
pub const DEFAULT_RIGHT_DELIMITER: &str = "}";

impl Default for Settings {
    fn default() -> Self {
        Self {
            path: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            delimiters: Delimiters::default(),
        }
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::new(DEFAULT_LEFT_DELIMITER, DEFAULT_RIGHT_DELIMITER)
    }
}

impl Settings {
    /// Default settings with `path` set to the first `i18n` directory found
    /// by [`path::search`].
    ///
    /// When no directory is found the path stays empty and a manager built
    /// from these settings translates nothing.
    pub fn discover() -> Self {
        let mut settings = Self::default();
        if let Some(found) = default_path() {
            settings.path = found;
        }
        settings
    }
}

/// Searches for the default translation directory.
pub fn default_path() -> Option<String> {
    let found = path::search(DEFAULT_DIRECTORY)?;
    debug!("Discovered default translation directory: {:?}", found);
    Some(found.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.path, "");
        assert_eq!(settings.language, "en");
        assert_eq!(settings.delimiters.left, "{#");
        assert_eq!(settings.delimiters.right, "}");
    }

    #[test]
    fn test_discover_keeps_defaults_besides_path() {
        let settings = Settings::discover();
        assert_eq!(settings.language, DEFAULT_LANGUAGE);
        assert_eq!(settings.delimiters, Delimiters::default());
    }
}
