//! Embedded filesystem and packed archive sources.

use lexicon::{embed_fs_option, Manager, MemoryFs, Options, ResourceArchive, RustEmbedFs, SourceKind};
use lexicon_common::test_utils::{fixture_tree, init_test_logging};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

#[derive(rust_embed::RustEmbed)]
#[folder = "tests/fixtures/embedded/"]
struct Fixtures;

fn embedded_manager() -> Manager {
    init_test_logging();
    Manager::new(embed_fs_option(RustEmbedFs::<Fixtures>::new(), "i18n"))
}

fn build_zip(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer.start_file(*name, SimpleFileOptions::default()).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

#[test]
fn test_embedded_languages() {
    let manager = embedded_manager();

    assert_eq!(manager.source_kind(), SourceKind::Embedded);
    assert_eq!(manager.languages(), vec!["en", "zh-CN"]);
    assert_eq!(manager.translate("hello", None), "Hello");
    assert_eq!(manager.translate("hello", Some("zh-CN")), "你好");
    assert_eq!(manager.translate("not_found", Some("zh-CN")), "未找到");
}

#[test]
fn test_embedded_substitution_and_format() {
    let manager = embedded_manager();

    assert_eq!(manager.translate("Hi {#name}", Some("zh-CN")), "Hi 爱丽丝");
    assert_eq!(
        lexicon::tf!(manager, "inbox", "Alice", 2),
        "Alice has 2 new messages"
    );
}

#[test]
fn test_embedded_set_path() {
    let manager = embedded_manager();

    manager.set_path("i18n/zh-CN").unwrap();
    // Relative to the new root every file is flat, so languages come from
    // file names.
    assert_eq!(manager.languages(), vec!["errors", "messages"]);

    assert!(manager.set_path("missing").is_err());
    assert_eq!(manager.path(), "i18n/zh-CN");
}

#[test]
fn test_embedded_is_never_watched() {
    let manager = embedded_manager();
    manager.init();
    assert!(!format!("{manager:?}").contains("watching: true"));
}

#[test]
fn test_archive_source() {
    init_test_logging();
    let archive = ResourceArchive::from_bytes(build_zip(&[
        ("i18n/en.json", r#"{"hello": "Hello", "name": "Alice"}"#),
        ("i18n/fr/common.yaml", "hello: Bonjour\nname: Alice\n"),
        ("other/de.json", r#"{"hello": "Hallo"}"#),
    ]))
    .unwrap();
    let manager = Manager::new(Options::with_archive(archive, "i18n"));

    assert_eq!(manager.source_kind(), SourceKind::Archive);
    assert_eq!(manager.languages(), vec!["en", "fr"]);
    assert_eq!(manager.translate("hello", Some("fr")), "Bonjour");
    assert_eq!(manager.translate("Bye {#name}", None), "Bye Alice");

    manager.set_path("other").unwrap();
    assert_eq!(manager.languages(), vec!["de"]);
}

#[test]
fn test_archive_falls_back_to_disk() {
    init_test_logging();
    let archive = ResourceArchive::from_bytes(build_zip(&[("i18n/en.json", "{}")])).unwrap();
    let dir = fixture_tree(&[("en.json", r#"{"hello": "From disk"}"#)]);
    let manager = Manager::new(Options::with_archive(archive, dir.path().to_string_lossy()));

    assert_eq!(manager.source_kind(), SourceKind::Disk);
    assert_eq!(manager.translate("hello", None), "From disk");
}

#[test]
fn test_invalid_archive_bytes() {
    let result = ResourceArchive::from_bytes(b"not a zip".to_vec());
    assert!(result.is_err());
}

#[test]
fn test_embedded_wins_over_archive() {
    let archive = ResourceArchive::from_bytes(build_zip(&[(
        "i18n/en.json",
        r#"{"hello": "From archive"}"#,
    )]))
    .unwrap();
    let fs = MemoryFs::new().with_file("i18n/en.json", r#"{"hello": "From memory"}"#);
    let mut options = embed_fs_option(fs, "i18n");
    options.archive = Some(archive.into());
    let manager = Manager::new(options);

    assert_eq!(manager.translate("hello", None), "From memory");
}

#[test]
fn test_disk_and_embedded_agree_on_duplicate_keys() {
    init_test_logging();
    let files = [
        ("en.json", r#"{"k": "flat", "only_flat": "1"}"#),
        ("en/x.json", r#"{"k": "nested", "only_nested": "2"}"#),
        ("fr/a.json", r#"{"k": "a"}"#),
        ("fr/b.json", r#"{"k": "b"}"#),
    ];
    let dir = fixture_tree(&files);
    let fs = files.iter().fold(MemoryFs::new(), |fs, (path, content)| {
        fs.with_file(format!("i18n/{path}"), *content)
    });

    let disk = Manager::new(Options::new(dir.path().to_string_lossy()));
    let embedded = Manager::new(embed_fs_option(fs, "i18n"));

    assert_eq!(disk.snapshot(), embedded.snapshot());
    assert_eq!(disk.translate("k", None), "nested");
    assert_eq!(disk.translate("k", Some("fr")), "b");
}
