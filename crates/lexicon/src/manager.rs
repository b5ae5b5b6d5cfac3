//! Translation manager

use crate::format::sprintf;
use crate::options::{default_options, Options};
use crate::pattern::Placeholder;
use crate::source::{Source, SourceKind};
use crate::watcher::{self, WatchHandle};
use crate::TranslationTable;
use lexicon_common::{path, LexiconError, Result};
use lexicon_config::Delimiters;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::fmt::{self, Display};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tracing::{debug, info, trace, warn};

/// Concurrency-safe translation manager with lazy loading and hot reload.
///
/// The table is loaded on the first lookup and kept until the source
/// changes. For disk sources a file watch clears it on the first change, and
/// the next lookup rebuilds it from scratch and re-arms the watch.
///
/// Cloning is cheap; clones share the same table and settings.
///
/// Nothing here fails at lookup time. A missing language returns the input
/// unchanged from [`translate`](Self::translate) and an empty string from
/// [`get_content`](Self::get_content).
#[derive(Clone)]
pub struct Manager {
    inner: Arc<Inner>,
}

struct Inner {
    state: RwLock<State>,
    loads: AtomicU64,
}

struct State {
    /// `None` until loaded, and again after an invalidation.
    table: Option<TranslationTable>,
    options: Options,
    placeholder: Placeholder,
    watch: Option<WatchHandle>,
}

impl State {
    fn resolve_language<'a>(&'a self, language: Option<&'a str>) -> &'a str {
        language
            .filter(|l| !l.is_empty())
            .unwrap_or(&self.options.language)
    }

    fn invalidate(&mut self) -> Option<WatchHandle> {
        self.table = None;
        self.watch.take()
    }
}

impl Manager {
    /// Creates a manager. Nothing is read until the first lookup or
    /// [`init`](Self::init).
    ///
    /// Empty delimiters are replaced by the defaults.
    pub fn new(mut options: Options) -> Self {
        let placeholder = Placeholder::new(&options.delimiters).unwrap_or_else(|e| {
            warn!("{}, using default delimiters", e);
            options.delimiters = Delimiters::default();
            Placeholder::default()
        });
        debug!("New translation manager: {:?}", options);

        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(State {
                    table: None,
                    options,
                    placeholder,
                    watch: None,
                }),
                loads: AtomicU64::new(0),
            }),
        }
    }

    /// Loads the table now instead of on the first lookup.
    pub fn init(&self) {
        drop(self.loaded());
    }

    /// Read access to a loaded state, loading first if needed.
    ///
    /// The load happens under the write lock after a re-check, and the guard
    /// is downgraded in place so the caller reads the table it just built.
    fn loaded(&self) -> RwLockReadGuard<'_, State> {
        {
            let state = self.inner.state.read();
            if state.table.is_some() {
                return state;
            }
        }

        let mut state = self.inner.state.write();
        if state.table.is_none() {
            self.load(&mut state);
        }
        RwLockWriteGuard::downgrade(state)
    }

    fn load(&self, state: &mut State) {
        let source = Source::select(&state.options);
        let kind = source.kind();

        // Arm the watch before reading so edits made during the load are not
        // lost; its callback blocks on the write lock held here.
        let watch = source.watch_root().and_then(|root| {
            let weak = Arc::downgrade(&self.inner);
            watcher::watch(root, move |id| invalidate_from_watch(&weak, id))
                .map_err(|e| warn!("Hot reload disabled for {:?}: {}", root, e))
                .ok()
        });

        let table = source.load(state.options.parser.as_ref());
        let generation = self.inner.loads.fetch_add(1, Ordering::AcqRel) + 1;
        info!(
            "Loaded {} languages from {} source {:?} (load #{})",
            table.len(),
            kind,
            state.options.path,
            generation
        );

        state.table = Some(table);
        state.watch = watch;
    }

    /// Translates `content` into `language`, or the default language when
    /// `language` is `None` or empty.
    ///
    /// If `content` is itself a key, its value is returned. Otherwise every
    /// placeholder naming a known key is replaced by that key's value and
    /// unknown placeholders are kept verbatim. A language with no data
    /// returns `content` unchanged.
    pub fn translate(&self, content: &str, language: Option<&str>) -> String {
        let state = self.loaded();
        let language = state.resolve_language(language);

        let Some(values) = state.table.as_ref().and_then(|table| table.get(language)) else {
            return content.to_string();
        };
        if let Some(value) = values.get(content) {
            return value.clone();
        }

        trace!("Translating template for language {}", language);
        state.placeholder.replace(content, values).into_owned()
    }

    /// Alias of [`translate`](Self::translate).
    pub fn t(&self, content: &str, language: Option<&str>) -> String {
        self.translate(content, language)
    }

    /// Exact-key lookup without placeholder handling. Returns an empty string
    /// if the language or key is missing.
    pub fn get_content(&self, key: &str, language: Option<&str>) -> String {
        let state = self.loaded();
        let language = state.resolve_language(language);

        state
            .table
            .as_ref()
            .and_then(|table| table.get(language))
            .and_then(|values| values.get(key))
            .cloned()
            .unwrap_or_default()
    }

    /// Translates `format` with the default language, then applies
    /// [`sprintf`] with `values`. Translated text may carry its own verbs.
    pub fn translate_format(&self, format: &str, values: &[&dyn Display]) -> String {
        sprintf(&self.translate(format, None), values)
    }

    /// Alias of [`translate_format`](Self::translate_format).
    pub fn tf(&self, format: &str, values: &[&dyn Display]) -> String {
        self.translate_format(format, values)
    }

    /// Like [`translate_format`](Self::translate_format) with an explicit
    /// language. An empty `language` means the default language.
    pub fn translate_format_lang(
        &self,
        language: &str,
        format: &str,
        values: &[&dyn Display],
    ) -> String {
        sprintf(&self.translate(format, Some(language)), values)
    }

    /// Alias of [`translate_format_lang`](Self::translate_format_lang).
    pub fn tfl(&self, language: &str, format: &str, values: &[&dyn Display]) -> String {
        self.translate_format_lang(language, format, values)
    }

    /// Sets the default language.
    pub fn set_language(&self, language: impl Into<String>) {
        let language = language.into();
        debug!("Default language set to {}", language);
        self.inner.state.write().options.language = language;
    }

    /// Changes the placeholder delimiters. Templates written with the old
    /// delimiters are no longer substituted.
    pub fn set_delimiters(&self, left: impl Into<String>, right: impl Into<String>) -> Result<()> {
        let delimiters = Delimiters::new(left, right);
        let placeholder = Placeholder::new(&delimiters)?;
        debug!("Placeholder pattern set to {}", placeholder.as_str());

        let mut state = self.inner.state.write();
        state.options.delimiters = delimiters;
        state.placeholder = placeholder;
        Ok(())
    }

    /// Points the manager at a new source root.
    ///
    /// The path must exist in the configured embedded filesystem or archive,
    /// or be found on disk by [`path::search`]. On success the current table
    /// is dropped and the next lookup loads from the new path; on failure
    /// nothing changes.
    pub fn set_path(&self, new_path: impl AsRef<Path>) -> Result<()> {
        let new_path = new_path.as_ref();
        let resolved = {
            let state = self.inner.state.read();
            resolve_path(&state.options, new_path)?
        };
        debug!("Source path set to {}", resolved);

        let stale = {
            let mut state = self.inner.state.write();
            state.options.path = resolved;
            state.invalidate()
        };
        drop(stale);
        Ok(())
    }

    /// True once a table is loaded and not yet invalidated.
    pub fn is_loaded(&self) -> bool {
        self.inner.state.read().table.is_some()
    }

    /// Loaded languages, sorted. Loads first if needed.
    pub fn languages(&self) -> Vec<String> {
        let state = self.loaded();
        let mut languages: Vec<String> = state
            .table
            .as_ref()
            .map(|table| table.keys().cloned().collect())
            .unwrap_or_default();
        languages.sort();
        languages
    }

    /// A copy of the loaded table. Loads first if needed.
    pub fn snapshot(&self) -> TranslationTable {
        self.loaded().table.clone().unwrap_or_default()
    }

    /// Default language.
    pub fn language(&self) -> String {
        self.inner.state.read().options.language.clone()
    }

    /// Configured source path.
    pub fn path(&self) -> String {
        self.inner.state.read().options.path.clone()
    }

    /// Current placeholder delimiters.
    pub fn delimiters(&self) -> Delimiters {
        self.inner.state.read().options.delimiters.clone()
    }

    /// Source kind the next load will read from.
    pub fn source_kind(&self) -> SourceKind {
        Source::select(&self.inner.state.read().options).kind()
    }

    /// Number of loads performed so far.
    pub fn load_count(&self) -> u64 {
        self.inner.loads.load(Ordering::Acquire)
    }
}

impl Default for Manager {
    /// A manager over [`default_options`].
    fn default() -> Self {
        Self::new(default_options())
    }
}

impl fmt::Debug for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.read();
        f.debug_struct("Manager")
            .field("options", &state.options)
            .field("loaded", &state.table.is_some())
            .field("watching", &state.watch.is_some())
            .finish()
    }
}

/// Clears the table if watch `id` is still the current one. A stale watch
/// that fired just before being replaced changes nothing.
fn invalidate_from_watch(inner: &Weak<Inner>, id: u64) {
    let Some(inner) = inner.upgrade() else {
        return;
    };

    let stale = {
        let mut state = inner.state.write();
        if state.watch.as_ref().map(WatchHandle::id) != Some(id) {
            trace!("Ignoring change from replaced watch {}", id);
            return;
        }
        state.invalidate()
    };
    info!("Translation files changed, table invalidated");
    drop(stale);
}

/// Resolves `new_path` against the active source kinds.
fn resolve_path(options: &Options, new_path: &Path) -> Result<String> {
    let as_str = new_path.to_string_lossy();

    if let Some(fs) = &options.embedded {
        if fs.contains(&as_str) {
            return Ok(as_str.into_owned());
        }
    }
    if let Some(archive) = &options.archive {
        if archive.contains(&as_str) {
            return Ok(as_str.into_owned());
        }
    }

    path::search(new_path)
        .map(|found| found.to_string_lossy().into_owned())
        .ok_or_else(|| LexiconError::PathNotFound {
            path: new_path.to_path_buf(),
        })
}
