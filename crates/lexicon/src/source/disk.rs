//! On-disk directory sources.

use super::{is_translation_file, TableBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Lists translation files under `root` as `(relative, path)` pairs, sorted
/// by the '/'-joined relative path.
///
/// A missing or unreadable root yields no files.
pub(super) fn scan(root: &Path) -> Vec<(String, PathBuf)> {
    let mut files: Vec<(String, PathBuf)> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Cannot read translation directory entry under {:?}: {}", root, e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let path = entry.into_path();
            relative(root, &path).map(|relative| (relative, path))
        })
        .filter(|(relative, _)| is_translation_file(relative))
        .collect();

    // Same key the embedded and archive sources sort by; a per-directory
    // walk order would put `en/x.json` before `en.json`.
    files.sort_by(|a, b| a.0.cmp(&b.0));
    files
}

/// Reads `file` and hands it to the builder under `relative`.
pub(super) fn add_file(builder: &mut TableBuilder<'_>, relative: &str, file: &Path) {
    let name = file.to_string_lossy();

    match fs::read(file) {
        Ok(content) => builder.add(relative, &name, &content),
        Err(e) => warn!("Cannot read translation file {}: {}", name, e),
    }
}

/// `file` relative to `root`, joined with '/' whatever the platform
/// separator. When `root` is itself a file, that file's name.
fn relative(root: &Path, file: &Path) -> Option<String> {
    let stripped = file.strip_prefix(root).ok()?;
    let stripped = if stripped.as_os_str().is_empty() {
        Path::new(file.file_name()?)
    } else {
        stripped
    };

    let segments: Vec<String> = stripped
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(segments.join("/"))
}
