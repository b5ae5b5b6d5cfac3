//! Process-wide default manager.
//!
//! A convenience for applications that want one shared translator without
//! passing a [`Manager`] around. It is built from [`default_options`] on
//! first use; libraries should take a `Manager` explicitly instead.
//!
//! [`default_options`]: crate::default_options

use crate::Manager;
use once_cell::sync::Lazy;
use std::fmt::Display;

static DEFAULT_MANAGER: Lazy<Manager> = Lazy::new(Manager::default);

/// The shared default manager.
pub fn manager() -> &'static Manager {
    &DEFAULT_MANAGER
}

/// [`Manager::translate`] on the default manager.
pub fn translate(content: &str, language: Option<&str>) -> String {
    DEFAULT_MANAGER.translate(content, language)
}

/// Alias of [`translate`].
pub fn t(content: &str, language: Option<&str>) -> String {
    DEFAULT_MANAGER.translate(content, language)
}

/// [`Manager::translate_format`] on the default manager.
pub fn tf(format: &str, values: &[&dyn Display]) -> String {
    DEFAULT_MANAGER.translate_format(format, values)
}

/// [`Manager::get_content`] on the default manager.
pub fn get_content(key: &str, language: Option<&str>) -> String {
    DEFAULT_MANAGER.get_content(key, language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_manager_is_shared() {
        assert!(std::ptr::eq(manager(), manager()));
    }

    #[test]
    fn test_unknown_key_passes_through() {
        assert_eq!(
            translate("lexicon.instance.test.unknown", None),
            "lexicon.instance.test.unknown"
        );
        assert_eq!(get_content("lexicon.instance.test.unknown", None), "");
        assert_eq!(t("lexicon.instance.test.unknown", None), "lexicon.instance.test.unknown");
    }

    #[test]
    fn test_tf_formats_untranslated_text() {
        assert_eq!(tf("lexicon.instance.test %s=%d", &[&"count", &2]), "lexicon.instance.test count=2");
    }
}
