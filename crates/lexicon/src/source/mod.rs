//! Translation sources and table loading.
//!
//! A load enumerates every translation file under the configured root,
//! derives the file's language from its path, parses it, and merges the
//! result into a fresh [`TranslationTable`].
//!
//! The language of a file is the name of its parent directory when the path
//! relative to the root has more than one segment (`zh-CN/messages.json`),
//! and the file name without extension otherwise (`en.json`).
//!
//! Files are processed in lexicographic path order, so when two files of one
//! language define the same key, the one sorting last wins.

mod archive;
mod disk;
mod embedded;

pub use archive::ResourceArchive;
pub use embedded::{EmbeddedFs, MemoryFs, RustEmbedFs};

use crate::options::Options;
use crate::parser::ContentParser;
use crate::TranslationTable;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Which kind of source a load reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Embedded filesystem compiled into the binary.
    Embedded,
    /// Packed zip archive.
    Archive,
    /// Directory tree on disk, watched for changes.
    Disk,
    /// Nothing configured; every lookup passes through.
    None,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Embedded => "embedded",
            Self::Archive => "archive",
            Self::Disk => "disk",
            Self::None => "none",
        };
        f.write_str(name)
    }
}

/// The source selected for one load.
pub(crate) enum Source {
    Embedded {
        fs: Arc<dyn EmbeddedFs>,
        root: String,
    },
    Archive {
        archive: Arc<ResourceArchive>,
        root: String,
    },
    Disk {
        root: PathBuf,
    },
    None,
}

impl Source {
    /// Selects the source for `options`: embedded filesystem first, then an
    /// archive containing the path, then the path on disk.
    pub(crate) fn select(options: &Options) -> Self {
        if let Some(fs) = &options.embedded {
            return Self::Embedded {
                fs: Arc::clone(fs),
                root: normalize(&options.path).to_string(),
            };
        }
        if let Some(archive) = options.archive.as_ref().filter(|a| a.contains(&options.path)) {
            return Self::Archive {
                archive: Arc::clone(archive),
                root: normalize(&options.path).to_string(),
            };
        }
        if options.path.is_empty() {
            return Self::None;
        }
        Self::Disk {
            root: PathBuf::from(&options.path),
        }
    }

    pub(crate) const fn kind(&self) -> SourceKind {
        match self {
            Self::Embedded { .. } => SourceKind::Embedded,
            Self::Archive { .. } => SourceKind::Archive,
            Self::Disk { .. } => SourceKind::Disk,
            Self::None => SourceKind::None,
        }
    }

    /// Directory to watch for changes. Only disk sources that exist as a
    /// directory are watched.
    pub(crate) fn watch_root(&self) -> Option<&Path> {
        match self {
            Self::Disk { root } if root.is_dir() => Some(root.as_path()),
            _ => None,
        }
    }

    /// Builds a fresh table. Unreadable or malformed files are logged and
    /// skipped; this never fails.
    pub(crate) fn load(&self, parser: &dyn ContentParser) -> TranslationTable {
        let mut builder = TableBuilder::new(parser);

        match self {
            Self::Embedded { fs, root } => {
                let mut files: Vec<String> = fs
                    .files()
                    .into_iter()
                    .filter(|path| relative_to(root, path).is_some_and(is_translation_file))
                    .collect();
                files.sort();
                for path in files {
                    let Some(relative) = relative_to(root, &path) else {
                        continue;
                    };
                    match fs.read(&path) {
                        Some(content) => builder.add(relative, &path, &content),
                        None => warn!("Embedded translation file vanished: {}", path),
                    }
                }
            }
            Self::Archive { archive, root } => {
                for (relative, path, content) in archive.files_under(root) {
                    if is_translation_file(relative) {
                        builder.add(relative, path, content);
                    }
                }
            }
            Self::Disk { root } => {
                for (relative, file) in disk::scan(root) {
                    disk::add_file(&mut builder, &relative, &file);
                }
            }
            Self::None => {}
        }

        builder.finish()
    }
}

/// Accumulates parsed files into a table.
pub(crate) struct TableBuilder<'a> {
    parser: &'a dyn ContentParser,
    table: TranslationTable,
}

impl<'a> TableBuilder<'a> {
    pub(crate) fn new(parser: &'a dyn ContentParser) -> Self {
        Self {
            parser,
            table: TranslationTable::new(),
        }
    }

    /// Parses `content` and merges it into the language derived from
    /// `relative` ('/'-separated). `name` is used for logging and format
    /// detection.
    pub(crate) fn add(&mut self, relative: &str, name: &str, content: &[u8]) {
        let Some(language) = language_of(relative) else {
            warn!("Cannot derive a language for translation file {}", name);
            return;
        };

        match self.parser.parse(name, content) {
            Ok(values) => {
                debug!(
                    "Loaded translation file {} for language {} ({} keys)",
                    name,
                    language,
                    values.len()
                );
                self.table
                    .entry(language.to_string())
                    .or_default()
                    .extend(values);
            }
            Err(e) => warn!("Skipping translation file {}: {}", name, e),
        }
    }

    pub(crate) fn finish(self) -> TranslationTable {
        self.table
    }
}

/// Derives the language identifier from a '/'-separated relative path.
pub(crate) fn language_of(relative: &str) -> Option<&str> {
    let segments: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();
    let language = match segments.as_slice() {
        [] => return None,
        [file] => file.rsplit_once('.').map_or(*file, |(stem, _)| stem),
        [.., parent, _] => *parent,
    };
    (!language.is_empty()).then_some(language)
}

/// Strips surrounding slashes and a leading `./`. An empty result means the
/// source root itself.
pub(crate) fn normalize(path: &str) -> &str {
    let path = path.trim_start_matches("./");
    let path = path.trim_matches('/');
    if path == "." {
        ""
    } else {
        path
    }
}

/// Returns `path` relative to `root`, or `None` if it lies outside.
pub(crate) fn relative_to<'p>(root: &str, path: &'p str) -> Option<&'p str> {
    let root = normalize(root);
    let path = normalize(path);
    if root.is_empty() {
        return Some(path);
    }
    if path == root {
        // The root names a single file.
        return Some(path.rsplit('/').next().unwrap_or(path));
    }
    path.strip_prefix(root)?.strip_prefix('/')
}

/// Matches the `*.*` scan pattern and skips hidden files and directories.
pub(crate) fn is_translation_file(relative: &str) -> bool {
    let mut segments = relative.split('/').filter(|s| !s.is_empty()).peekable();
    let mut file_name = None;
    while let Some(segment) = segments.next() {
        if segment.starts_with('.') {
            return false;
        }
        if segments.peek().is_none() {
            file_name = Some(segment);
        }
    }
    file_name.is_some_and(|name| name.contains('.'))
}
