//! Packed zip resource archives.

use super::{normalize, relative_to};
use lexicon_common::{LexiconError, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;
use tracing::debug;
use zip::ZipArchive;

/// A zip archive decoded into memory.
///
/// Typically built from bytes baked into the binary with `include_bytes!`.
/// Entry names are normalized to '/'-separated paths without a leading slash.
#[derive(Debug, Clone, Default)]
pub struct ResourceArchive {
    files: BTreeMap<String, Vec<u8>>,
    dirs: BTreeSet<String>,
}

impl ResourceArchive {
    /// Decodes a zip archive held in memory.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let mut zip = ZipArchive::new(Cursor::new(bytes.into()))
            .map_err(|e| LexiconError::Archive(e.to_string()))?;

        let mut archive = Self::default();
        for index in 0..zip.len() {
            let mut entry = zip
                .by_index(index)
                .map_err(|e| LexiconError::Archive(e.to_string()))?;
            let name = normalize(entry.name()).to_string();
            if name.is_empty() {
                continue;
            }
            if entry.is_dir() {
                archive.add_dirs(&name);
                continue;
            }

            let mut content = Vec::new();
            entry
                .read_to_end(&mut content)
                .map_err(|e| LexiconError::Archive(format!("{name}: {e}")))?;
            if let Some((parent, _)) = name.rsplit_once('/') {
                archive.add_dirs(parent);
            }
            archive.files.insert(name, content);
        }

        debug!(
            "Opened resource archive with {} files in {} directories",
            archive.files.len(),
            archive.dirs.len()
        );
        Ok(archive)
    }

    /// Reads and decodes a zip archive from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_bytes(fs::read(path)?)
    }

    fn add_dirs(&mut self, dir: &str) {
        let mut current = String::new();
        for segment in dir.split('/').filter(|s| !s.is_empty()) {
            if !current.is_empty() {
                current.push('/');
            }
            current.push_str(segment);
            self.dirs.insert(current.clone());
        }
    }

    /// True if `path` names a file or directory inside the archive. The empty
    /// path is the archive root and is contained by any non-empty archive.
    pub fn contains(&self, path: &str) -> bool {
        let path = normalize(path);
        if path.is_empty() {
            return !self.files.is_empty();
        }
        self.files.contains_key(path) || self.dirs.contains(path)
    }

    /// Files under `root` as `(relative path, full path, contents)`, in
    /// lexicographic order.
    pub fn files_under<'a>(
        &'a self,
        root: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a str, &'a [u8])> + 'a {
        self.files.iter().filter_map(move |(path, content)| {
            relative_to(root, path).map(|relative| (relative, path.as_str(), content.as_slice()))
        })
    }

    /// Number of files in the archive.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True if the archive holds no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
