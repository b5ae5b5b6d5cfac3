//! Test utilities shared across the Lexicon workspace.
//!
//! Enabled for this crate's own tests and for other crates through the
//! `testing` feature.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Writes `contents` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    fs::write(&path, contents).expect("Failed to write fixture file");
    path
}

/// Creates a temporary directory populated with the given `(path, contents)`
/// files.
pub fn fixture_tree(files: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = create_temp_dir();
    for (relative, contents) in files {
        write_file(dir.path(), relative, contents);
    }
    dir
}
