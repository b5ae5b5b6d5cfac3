//! Integration tests for lexicon-common crate.

use lexicon_common::path::{exists, search};
use std::fs;
use lexicon_common::LexiconError;

#[test]
fn test_search_finds_fixture_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("i18n")).unwrap();
    fs::write(dir.path().join("i18n/en.json"), "{}").unwrap();
    let found = search(dir.path().join("i18n")).expect("i18n directory should be found");
    assert!(found.is_dir());
    assert!(exists(found.join("en.json")));
}

#[test]
fn test_search_rejects_missing_relative_path() {
    assert!(search("definitely-not-a-lexicon-directory-7f3a").is_none());
}

#[test]
fn test_config_error_display() {
    let err = LexiconError::config("language must not be empty");
    assert_eq!(err.to_string(), "Configuration error: language must not be empty");
}
