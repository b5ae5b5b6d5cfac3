//! Path search helpers.
//!
//! Relative paths are resolved against a fixed list of candidate directories
//! so that a translation directory is found whether the host binary is run
//! from its project root, from its install directory, or through cargo.

use std::env;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Returns the directories a relative path is searched in, in priority order.
///
/// Directories are deduplicated; candidates that cannot be determined are
/// skipped.
pub fn search_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }
    if let Some(manifest_dir) = env::var_os("CARGO_MANIFEST_DIR") {
        dirs.push(PathBuf::from(manifest_dir));
    }

    let mut unique: Vec<PathBuf> = Vec::with_capacity(dirs.len());
    for dir in dirs {
        if !unique.contains(&dir) {
            unique.push(dir);
        }
    }
    unique
}

/// Searches for `path` and returns its canonical location.
///
/// Absolute paths are only checked for existence. Relative paths are tried
/// against each of [`search_dirs`] in turn. Returns `None` when nothing
/// matches.
pub fn search(path: impl AsRef<Path>) -> Option<PathBuf> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return None;
    }

    if path.is_absolute() {
        return path.canonicalize().ok();
    }

    search_dirs().into_iter().find_map(|dir| {
        let candidate = dir.join(path);
        trace!("Searching for {:?} in {:?}", path, dir);
        candidate.canonicalize().ok()
    })
}

/// Returns true if `path` exists on disk.
pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}
