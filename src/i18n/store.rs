//! Resolved, read-only content for every supported locale.

use std::collections::BTreeMap;
use std::path::Path;

use crate::i18n::loader::{load_content_dir, load_embedded};
use crate::i18n::merge::merged;
use crate::i18n::{ContentError, ContentOverride, ContentTree, LocaleKey};

/// What: Mapping from every `LocaleKey` to its fully resolved `ContentTree`.
///
/// Details:
/// - Built once and never mutated; share it by reference.
/// - Holds an entry for every supported locale, so `get` cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedContentStore {
    trees: BTreeMap<LocaleKey, ContentTree>,
}

impl LocalizedContentStore {
    /// What: Resolve every locale from a base tree and per-locale overrides.
    ///
    /// Inputs:
    /// - `base`: Complete tree for `LocaleKey::BASE`
    /// - `overrides`: Partial trees for non-base locales
    ///
    /// Output:
    /// - Store with one resolved tree per supported locale
    ///
    /// # Errors
    /// - `SchemaIncomplete` when the base, or a merged tree, leaves a required
    ///   field empty
    /// - `MergeIndexOutOfBounds` when an override list reaches past the base list
    ///
    /// Details:
    /// - Locales without an override resolve to the base tree.
    /// - An override keyed by the base locale is ignored with a warning, so
    ///   `get(LocaleKey::BASE)` always equals `base`.
    /// - Deterministic: identical inputs give equal stores.
    pub fn build(
        base: ContentTree,
        mut overrides: BTreeMap<LocaleKey, ContentOverride>,
    ) -> Result<Self, ContentError> {
        ensure_complete(LocaleKey::BASE, &base)?;

        if overrides.remove(&LocaleKey::BASE).is_some() {
            tracing::warn!(
                locale = %LocaleKey::BASE,
                "ignoring override for the base locale"
            );
        }

        let mut trees = BTreeMap::new();
        for locale in LocaleKey::ALL.into_iter().filter(|l| !l.is_base()) {
            let tree = match overrides.remove(&locale) {
                Some(patch) => merged(&base, patch).map_err(|e| e.for_locale(locale))?,
                None => {
                    tracing::debug!(locale = %locale, "no override, using base content");
                    base.clone()
                }
            };
            ensure_complete(locale, &tree)?;
            trees.insert(locale, tree);
        }
        trees.insert(LocaleKey::BASE, base);

        tracing::debug!(locales = trees.len(), "localized content store built");
        Ok(Self { trees })
    }

    /// What: Build the store from the content compiled into the binary.
    ///
    /// # Errors
    /// - Any error from parsing the embedded files or from `build`
    pub fn embedded() -> Result<Self, ContentError> {
        let (base, overrides) = load_embedded()?;
        Self::build(base, overrides)
    }

    /// What: Build the store from a content directory.
    ///
    /// Inputs:
    /// - `dir`: Directory with a complete `en.yml` and optional `{code}.yml`
    ///   overrides
    ///
    /// # Errors
    /// - Any error from `load_content_dir` or from `build`
    pub fn load_dir(dir: &Path) -> Result<Self, ContentError> {
        let (base, overrides) = load_content_dir(dir)?;
        Self::build(base, overrides)
    }

    /// Resolved tree for `locale`.
    #[must_use]
    pub fn get(&self, locale: LocaleKey) -> &ContentTree {
        // Every LocaleKey is inserted by `build`.
        &self.trees[&locale]
    }

    /// Resolved tree for the base locale.
    #[must_use]
    pub fn base(&self) -> &ContentTree {
        self.get(LocaleKey::BASE)
    }

    /// What: Resolved tree for a locale given by code.
    ///
    /// Inputs:
    /// - `code`: Locale code such as `"ja"`
    ///
    /// # Errors
    /// - `ContentError::UnknownLocale` when `code` is not a supported locale
    pub fn get_by_code(&self, code: &str) -> Result<&ContentTree, ContentError> {
        let locale: LocaleKey = code.parse()?;
        Ok(self.get(locale))
    }

    /// What: Resolved tree for `code`, or the base tree when unsupported.
    ///
    /// Details:
    /// - This is the lookup a page renderer should use for user-supplied codes.
    #[must_use]
    pub fn get_or_base(&self, code: &str) -> &ContentTree {
        self.get_by_code(code).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "falling back to base locale");
            self.base()
        })
    }

    /// Supported locales with their resolved trees, base first.
    pub fn iter(&self) -> impl Iterator<Item = (LocaleKey, &ContentTree)> {
        self.trees.iter().map(|(locale, tree)| (*locale, tree))
    }

    /// Supported locales, base first.
    #[must_use]
    pub const fn locales(&self) -> &'static [LocaleKey] {
        &LocaleKey::ALL
    }
}

fn ensure_complete(locale: LocaleKey, tree: &ContentTree) -> Result<(), ContentError> {
    match tree.first_missing_field() {
        Some(path) => Err(ContentError::SchemaIncomplete { locale, path }),
        None => Ok(()),
    }
}
