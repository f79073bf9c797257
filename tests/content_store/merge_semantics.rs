//! Store-level merge behavior over the embedded English base.

#![cfg(test)]

use std::collections::BTreeMap;

use folio::i18n::loader::{EMBEDDED_BASE, parse_base_yaml, parse_override_yaml};
use folio::i18n::{ContentError, ContentOverride, ContentTree, LocaleKey, LocalizedContentStore};

/// What: Parse the embedded English base.
///
/// Output:
/// - Complete `ContentTree`
fn base() -> ContentTree {
    parse_base_yaml(EMBEDDED_BASE, "en.yml").expect("embedded base parses")
}

/// What: Build a store with one Japanese override given as YAML.
///
/// Inputs:
/// - `yaml`: Override document
///
/// Output:
/// - Build result
fn build_with_ja(yaml: &str) -> Result<LocalizedContentStore, ContentError> {
    let patch = parse_override_yaml(yaml, "ja.yml").expect("override parses");
    LocalizedContentStore::build(base(), BTreeMap::from([(LocaleKey::Ja, patch)]))
}

#[test]
/// What: The base locale resolves to the base tree unchanged.
fn integration_base_locale_is_the_base_tree() {
    let store = LocalizedContentStore::embedded().expect("embedded store builds");
    assert_eq!(store.get(LocaleKey::En), &base());
    assert_eq!(store.base(), &base());
}

#[test]
/// What: Building twice from the same inputs gives equal stores.
fn integration_build_is_deterministic() {
    let first = LocalizedContentStore::embedded().expect("first build");
    let second = LocalizedContentStore::embedded().expect("second build");
    assert_eq!(first, second);
}

#[test]
/// What: An override that repeats the whole base yields the base.
///
/// Details:
/// - Merging a tree onto itself is the identity.
fn integration_full_override_equal_to_base_is_identity() {
    let base = base();
    let patch = ContentOverride::from(base.clone());
    let store = LocalizedContentStore::build(base.clone(), BTreeMap::from([(LocaleKey::Ja, patch)]))
        .expect("build succeeds");
    assert_eq!(store.get(LocaleKey::Ja), &base);
}

#[test]
/// What: Embedded Japanese content overrides titles and keeps English data.
fn integration_embedded_japanese_content() {
    let store = LocalizedContentStore::embedded().expect("embedded store builds");
    let en = store.get(LocaleKey::En);
    let ja = store.get(LocaleKey::Ja);

    assert_eq!(en.oss_contributions.title, "OSS Contributions");
    assert_eq!(ja.oss_contributions.title, "OSSコントリビューション");
    assert_eq!(ja.skills.title, "スキル");

    // Only descriptions are translated; everything else comes from the base.
    assert_eq!(ja.projects.projects.len(), en.projects.projects.len());
    for (ja_project, en_project) in ja.projects.projects.iter().zip(&en.projects.projects) {
        assert_eq!(ja_project.name, en_project.name);
        assert_eq!(ja_project.repo_url, en_project.repo_url);
        assert_eq!(ja_project.demo_url, en_project.demo_url);
        assert_eq!(ja_project.package_url, en_project.package_url);
        assert_eq!(ja_project.category, en_project.category);
        assert_ne!(ja_project.description, en_project.description);
    }
    assert_eq!(ja.oss_contributions.contributions, en.oss_contributions.contributions);
    assert_eq!(
        ja.skills.frameworks_and_libraries,
        en.skills.frameworks_and_libraries
    );
}

#[test]
/// What: The name token survives the merge untouched.
fn integration_name_token_is_preserved() {
    let store = LocalizedContentStore::embedded().expect("embedded store builds");
    for (_, tree) in store.iter() {
        assert!(tree.intro.paragraphs[0].contains("{myname}"));
    }
}

#[test]
/// What: Positional merge patches only the populated index.
fn integration_positional_hole_keeps_base_entry() {
    let store = build_with_ja(
        "skills:\n  frameworksAndLibraries:\n    - ~\n    - \"Next\"\n",
    )
    .expect("build succeeds");
    let skills = &store.get(LocaleKey::Ja).skills.frameworks_and_libraries;
    assert_eq!(skills[0], "React");
    assert_eq!(skills[1], "Next");
    assert_eq!(skills[2], "Tailwind CSS");
    assert_eq!(skills.len(), base().skills.frameworks_and_libraries.len());
}

#[test]
/// What: A populated override entry past the base list fails the build.
///
/// Details:
/// - The error names the locale, list path, index, and base length.
fn integration_out_of_bounds_entry_fails() {
    let mut yaml = String::from("ossContributions:\n  contributions:\n");
    for _ in 0..99 {
        yaml.push_str("    - ~\n");
    }
    yaml.push_str("    - project: \"Extra\"\n");

    let err = build_with_ja(&yaml).expect_err("index 99 is past the two base entries");
    match err {
        ContentError::MergeIndexOutOfBounds {
            locale,
            path,
            index,
            len,
        } => {
            assert_eq!(locale, LocaleKey::Ja);
            assert_eq!(path, "ossContributions.contributions");
            assert_eq!(index, 99);
            assert_eq!(len, 2);
        }
        other => panic!("expected MergeIndexOutOfBounds, got {other:?}"),
    }
}

#[test]
/// What: An override that blanks a required string is rejected.
fn integration_blank_override_is_incomplete() {
    let err = build_with_ja("intro:\n  greeting: \"   \"\n").expect_err("blank greeting");
    assert!(matches!(
        err,
        ContentError::SchemaIncomplete { locale: LocaleKey::Ja, ref path } if path == "intro.greeting"
    ));
}

#[test]
/// What: Unsupported locale codes are reported, supported ones resolve.
fn integration_lookup_by_code() {
    let store = LocalizedContentStore::embedded().expect("embedded store builds");
    assert!(matches!(
        store.get_by_code("fr"),
        Err(ContentError::UnknownLocale(code)) if code == "fr"
    ));
    assert_eq!(
        store.get_by_code("ja").expect("ja is supported").skills.title,
        "スキル"
    );
    assert_eq!(store.get_or_base("fr"), store.base());
}

#[test]
/// What: An explicit `null` on a required field replaces the base and fails the build.
///
/// Inputs:
/// - Overrides leaving `greeting` empty, nulling a list, and nulling a nested field.
///
/// Output:
/// - `SchemaIncomplete` naming the nulled path.
///
/// Details:
/// - An absent key keeps the base value; a present `null` never does.
fn integration_null_required_field_is_incomplete() {
    let cases = [
        ("intro:\n  greeting:\n", "intro.greeting"),
        ("skills:\n  frameworksAndLibraries: ~\n", "skills.frameworksAndLibraries"),
        ("projects:\n  projects:\n    - ~\n    - description: ~\n", "projects.projects[1].description"),
        ("ossContributions: ~\n", "ossContributions"),
    ];
    for (yaml, expected) in cases {
        let err = build_with_ja(yaml).expect_err("null on a required field");
        assert!(
            matches!(
                err,
                ContentError::SchemaIncomplete { locale: LocaleKey::Ja, ref path } if path == expected
            ),
            "{yaml:?} gave {err:?}"
        );
    }
}

#[test]
/// What: A `null` optional URL removes the link instead of failing.
fn integration_null_optional_url_clears_link() {
    let store = build_with_ja("projects:\n  projects:\n    - demoUrl: ~\n").expect("build succeeds");
    assert_eq!(store.get(LocaleKey::Ja).projects.projects[0].demo_url, None);
    assert!(store.get(LocaleKey::En).projects.projects[0].demo_url.is_some());
}

#[test]
/// What: A base with an empty required list is rejected.
///
/// Details:
/// - `ossContributions.contributions` is the one list allowed to be empty.
fn integration_empty_required_list_in_base_is_incomplete() {
    let mut emptied = base();
    emptied.skills.frameworks_and_libraries.clear();
    let err = LocalizedContentStore::build(emptied, BTreeMap::new()).expect_err("empty list");
    assert!(matches!(
        err,
        ContentError::SchemaIncomplete { locale: LocaleKey::En, ref path }
            if path == "skills.frameworksAndLibraries"
    ));

    let mut emptied = base();
    emptied.projects.projects.clear();
    let err = LocalizedContentStore::build(emptied, BTreeMap::new()).expect_err("empty list");
    assert!(matches!(
        err,
        ContentError::SchemaIncomplete { ref path, .. } if path == "projects.projects"
    ));

    let mut no_contributions = base();
    no_contributions.oss_contributions.contributions.clear();
    assert!(LocalizedContentStore::build(no_contributions, BTreeMap::new()).is_ok());
}
