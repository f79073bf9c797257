//! Loading content from a directory instead of the embedded files.

#![cfg(test)]

use std::fs;
use std::path::Path;

use folio::i18n::loader::{EMBEDDED_BASE, EMBEDDED_JA};
use folio::i18n::{ContentError, LocaleKey, LocalizedContentStore};
use tempfile::TempDir;

/// What: Create a content directory holding the given files.
///
/// Inputs:
/// - `files`: `(file name, contents)` pairs
///
/// Output:
/// - Temporary directory, removed on drop
fn content_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).expect("write content file");
    }
    dir
}

#[test]
/// What: A directory with the embedded files builds the embedded store.
fn integration_directory_matches_embedded() {
    let dir = content_dir(&[("en.yml", EMBEDDED_BASE), ("ja.yml", EMBEDDED_JA)]);
    let from_dir = LocalizedContentStore::load_dir(dir.path()).expect("directory loads");
    let embedded = LocalizedContentStore::embedded().expect("embedded store builds");
    assert_eq!(from_dir, embedded);
}

#[test]
/// What: A locale without an override file renders as the base.
fn integration_missing_override_file_uses_base() {
    let dir = content_dir(&[("en.yml", EMBEDDED_BASE)]);
    let store = LocalizedContentStore::load_dir(dir.path()).expect("directory loads");
    assert_eq!(store.get(LocaleKey::Ja), store.base());
}

#[test]
/// What: A base file missing a required field is reported with its path.
fn integration_incomplete_base_is_rejected() {
    let without_oss_title = EMBEDDED_BASE.replace("  title: \"OSS Contributions\"\n", "");
    let dir = content_dir(&[("en.yml", &without_oss_title)]);
    let err = LocalizedContentStore::load_dir(dir.path()).expect_err("title is required");
    assert!(matches!(
        err,
        ContentError::SchemaIncomplete { locale: LocaleKey::En, ref path }
            if path == "ossContributions.title"
    ));
}

#[test]
/// What: Typos in override keys fail instead of being ignored.
fn integration_unknown_override_key_is_a_parse_error() {
    let dir = content_dir(&[("en.yml", EMBEDDED_BASE), ("ja.yml", "skils:\n  title: \"x\"\n")]);
    let err = LocalizedContentStore::load_dir(dir.path()).expect_err("unknown key");
    assert!(matches!(err, ContentError::Parse { .. }));
    assert!(err.to_string().contains("ja.yml"));
}

#[test]
/// What: A directory without `en.yml` is an I/O error naming the file.
fn integration_missing_base_file() {
    let dir = content_dir(&[]);
    let err = LocalizedContentStore::load_dir(dir.path()).expect_err("en.yml is required");
    match err {
        ContentError::Io { path, .. } => assert_eq!(path, dir.path().join(Path::new("en.yml"))),
        other => panic!("expected Io, got {other:?}"),
    }
}
