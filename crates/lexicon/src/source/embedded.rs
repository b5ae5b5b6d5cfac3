//! Embedded, read-only filesystems.

use super::relative_to;
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// A read-only filesystem compiled into, or held by, the process.
///
/// Paths are '/'-separated and relative to the filesystem root.
pub trait EmbeddedFs: Send + Sync {
    /// Every regular file in the filesystem.
    fn files(&self) -> Vec<String>;

    /// Contents of the file at `path`, if present.
    fn read(&self, path: &str) -> Option<Cow<'_, [u8]>>;

    /// True if `path` is a file or a directory containing at least one file.
    fn contains(&self, path: &str) -> bool {
        self.files()
            .iter()
            .any(|file| relative_to(path, file).is_some())
    }
}

/// Adapter exposing a `rust-embed` asset folder as an [`EmbeddedFs`].
///
/// ```rust,ignore
/// #[derive(rust_embed::RustEmbed)]
/// #[folder = "assets/"]
/// struct Assets;
///
/// let options = lexicon::embed_fs_option(lexicon::RustEmbedFs::<Assets>::new(), "i18n");
/// ```
pub struct RustEmbedFs<T>(PhantomData<fn() -> T>);

impl<T> RustEmbedFs<T> {
    /// Creates the adapter.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for RustEmbedFs<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RustEmbedFs<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RustEmbedFs")
            .field(&std::any::type_name::<T>())
            .finish()
    }
}

impl<T: RustEmbed> EmbeddedFs for RustEmbedFs<T> {
    fn files(&self) -> Vec<String> {
        T::iter().map(Cow::into_owned).collect()
    }

    fn read(&self, path: &str) -> Option<Cow<'_, [u8]>> {
        T::get(path).map(|file| file.data)
    }
}

/// In-memory [`EmbeddedFs`], handy for tests and generated content.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryFs {
    /// Creates an empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the file at `path`.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), content.into());
    }

    /// Builder form of [`MemoryFs::insert`].
    #[must_use]
    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(path, content);
        self
    }
}

impl EmbeddedFs for MemoryFs {
    fn files(&self) -> Vec<String> {
        self.files.keys().cloned().collect()
    }

    fn read(&self, path: &str) -> Option<Cow<'_, [u8]>> {
        self.files.get(path).map(|content| Cow::Borrowed(content.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_fs_read() {
        let fs = MemoryFs::new().with_file("i18n/en.json", "{}");
        assert_eq!(fs.read("i18n/en.json").as_deref(), Some(&b"{}"[..]));
        assert!(fs.read("i18n/fr.json").is_none());
    }

    #[test]
    fn test_contains() {
        let fs = MemoryFs::new().with_file("i18n/zh-CN/messages.json", "{}");
        assert!(fs.contains("i18n"));
        assert!(fs.contains("i18n/zh-CN"));
        assert!(fs.contains("i18n/zh-CN/messages.json"));
        assert!(fs.contains(""));
        assert!(!fs.contains("locales"));
        assert!(!fs.contains("i18n/zh"));
    }
}
