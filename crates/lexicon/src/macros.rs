//! Formatting macros over [`Manager`](crate::Manager).

/// Translates a format string with the manager's default language, then
/// formats it with the given arguments.
///
/// ```rust,no_run
/// let manager = lexicon::Manager::new(lexicon::Options::new("i18n"));
/// let text = lexicon::tf!(manager, "inbox.summary", "Alice", 3);
/// ```
#[macro_export]
macro_rules! tf {
    ($manager:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $manager.translate_format($format, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Like [`tf!`] with an explicit language.
///
/// ```rust,no_run
/// let manager = lexicon::Manager::new(lexicon::Options::new("i18n"));
/// let text = lexicon::tfl!(manager, "fr", "inbox.summary", "Alice", 3);
/// ```
#[macro_export]
macro_rules! tfl {
    ($manager:expr, $language:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $manager.translate_format_lang($language, $format, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}
