//! Manager options and their constructors.

use crate::parser::{ContentParser, StructuredParser};
use crate::source::{EmbeddedFs, ResourceArchive};
use lexicon_config::{Delimiters, Settings, DEFAULT_LANGUAGE};
use std::fmt;
use std::sync::Arc;

/// Configuration for a [`Manager`](crate::Manager).
///
/// Which source a load reads from depends on the optional capabilities set
/// here: an embedded filesystem wins, then an archive containing `path`, then
/// `path` on disk. A missing path is not an error; the manager simply has
/// nothing to translate with.
#[derive(Clone)]
pub struct Options {
    /// Source root, interpreted by the active source kind.
    pub path: String,
    /// Language used when a lookup does not name one.
    pub language: String,
    /// Placeholder delimiters.
    pub delimiters: Delimiters,
    /// Embedded filesystem to read from instead of disk.
    pub embedded: Option<Arc<dyn EmbeddedFs>>,
    /// Packed archive consulted when it contains `path`.
    pub archive: Option<Arc<ResourceArchive>>,
    /// Decoder for translation files.
    pub parser: Arc<dyn ContentParser>,
}

impl Options {
    /// Options reading from `path` with default language and delimiters.
    ///
    /// Unlike [`default_options`], no directory search is performed.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            delimiters: Delimiters::default(),
            embedded: None,
            archive: None,
            parser: Arc::new(StructuredParser),
        }
    }

    /// Options built from serializable settings.
    pub fn from_settings(settings: Settings) -> Self {
        Self {
            language: settings.language,
            delimiters: settings.delimiters,
            ..Self::new(settings.path)
        }
    }

    /// Options reading `path` from inside a packed archive. Falls back to
    /// disk if the archive does not contain `path`.
    pub fn with_archive(archive: impl Into<Arc<ResourceArchive>>, path: impl Into<String>) -> Self {
        Self {
            archive: Some(archive.into()),
            ..Self::new(path)
        }
    }

    /// Sets the default language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the placeholder delimiters.
    #[must_use]
    pub fn delimiters(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.delimiters = Delimiters::new(left, right);
        self
    }

    /// Replaces the translation file decoder.
    #[must_use]
    pub fn parser(mut self, parser: impl ContentParser + 'static) -> Self {
        self.parser = Arc::new(parser);
        self
    }
}

impl Default for Options {
    /// Same as [`default_options`].
    fn default() -> Self {
        default_options()
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("path", &self.path)
            .field("language", &self.language)
            .field("delimiters", &self.delimiters)
            .field("embedded", &self.embedded.is_some())
            .field("archive", &self.archive.as_ref().map(|a| a.len()))
            .finish_non_exhaustive()
    }
}

/// Default options: language `en`, delimiters `{#`/`}`, and `path` set to
/// the first `i18n` directory found in the working directory, the executable's
/// directory, or `CARGO_MANIFEST_DIR`. The path is empty if none exists.
pub fn default_options() -> Options {
    Options::from_settings(Settings::discover())
}

/// Options reading from an embedded filesystem rooted at `path`.
pub fn embed_fs_option(fs: impl EmbeddedFs + 'static, path: impl Into<String>) -> Options {
    Options {
        embedded: Some(Arc::new(fs)),
        ..Options::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemoryFs;

    #[test]
    fn test_new_has_defaults() {
        let options = Options::new("i18n");
        assert_eq!(options.path, "i18n");
        assert_eq!(options.language, "en");
        assert_eq!(options.delimiters, Delimiters::new("{#", "}"));
        assert!(options.embedded.is_none());
        assert!(options.archive.is_none());
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            path: "locales".to_string(),
            language: "ja".to_string(),
            delimiters: Delimiters::new("<%", "%>"),
        };
        let options = Options::from_settings(settings);
        assert_eq!(options.path, "locales");
        assert_eq!(options.language, "ja");
        assert_eq!(options.delimiters.left, "<%");
    }

    #[test]
    fn test_embed_fs_option() {
        let options = embed_fs_option(MemoryFs::new(), "i18n").language("fr");
        assert!(options.embedded.is_some());
        assert_eq!(options.path, "i18n");
        assert_eq!(options.language, "fr");
    }

    #[test]
    fn test_debug_hides_capabilities() {
        let rendered = format!("{:?}", embed_fs_option(MemoryFs::new(), "i18n"));
        assert!(rendered.contains("embedded: true"));
        assert!(rendered.contains("path: \"i18n\""));
    }
}
