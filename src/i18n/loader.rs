//! Content file loading and parsing.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::merge::Merge;
use crate::i18n::{ContentError, ContentOverride, ContentTree, LocaleKey};

/// Base locale content compiled into the binary.
pub const EMBEDDED_BASE: &str = include_str!("../../data/locales/en.yml");

/// Japanese overrides compiled into the binary.
pub const EMBEDDED_JA: &str = include_str!("../../data/locales/ja.yml");

/// What: Embedded YAML source for a locale.
///
/// Inputs:
/// - `locale`: Locale to look up
///
/// Output:
/// - Complete tree text for the base locale, override text for the others
#[must_use]
pub const fn embedded_source(locale: LocaleKey) -> &'static str {
    match locale {
        LocaleKey::En => EMBEDDED_BASE,
        LocaleKey::Ja => EMBEDDED_JA,
    }
}

/// What: Check whether YAML text has no content besides comments.
///
/// Inputs:
/// - `yaml`: File content
///
/// Output:
/// - `true` if every line is blank or a `#` comment
fn is_blank_yaml(yaml: &str) -> bool {
    yaml.lines().all(|line| {
        let trimmed = line.trim();
        trimmed.is_empty() || trimmed.starts_with('#')
    })
}

/// What: Parse override YAML into a `ContentOverride`.
///
/// Inputs:
/// - `yaml`: File content
/// - `origin`: Where the text came from, for error messages
///
/// Output:
/// - The parsed override; a blank document is an empty override
///
/// # Errors
/// - Returns `ContentError::Parse` for invalid YAML or unknown keys
pub fn parse_override_yaml(yaml: &str, origin: &str) -> Result<ContentOverride, ContentError> {
    if is_blank_yaml(yaml) {
        tracing::debug!(origin, "content document is empty");
        return Ok(ContentOverride::default());
    }
    serde_norway::from_str(yaml).map_err(|error| ContentError::Parse {
        origin: origin.to_string(),
        error,
    })
}

/// What: Parse the base locale YAML into a complete `ContentTree`.
///
/// Inputs:
/// - `yaml`: File content
/// - `origin`: Where the text came from, for error messages
///
/// Output:
/// - The complete base tree
///
/// # Errors
/// - Returns `ContentError::Parse` for invalid YAML or unknown keys
/// - Returns `ContentError::SchemaIncomplete` naming the first field the
///   document leaves out
///
/// Details:
/// - The document is read with the same partial schema as overrides and then
///   completed, so a missing field is reported by path rather than as a YAML
///   error.
pub fn parse_base_yaml(yaml: &str, origin: &str) -> Result<ContentTree, ContentError> {
    let patch = parse_override_yaml(yaml, origin)?;
    ContentTree::from_patch(patch, "").map_err(|e| e.for_locale(LocaleKey::BASE))
}

/// What: Path of a locale's content file inside a content directory.
#[must_use]
pub fn content_file_path(dir: &Path, locale: LocaleKey) -> PathBuf {
    dir.join(format!("{}.yml", locale.code()))
}

fn read_file(path: &Path) -> Result<String, ContentError> {
    fs::read_to_string(path).map_err(|error| ContentError::Io {
        path: path.to_path_buf(),
        error,
    })
}

/// What: Load the complete base tree from a content directory.
///
/// Inputs:
/// - `dir`: Directory holding `en.yml`
///
/// # Errors
/// - Returns `ContentError::Io` when the file is missing or unreadable
/// - Otherwise as `parse_base_yaml`
pub fn load_base_file(dir: &Path) -> Result<ContentTree, ContentError> {
    let path = content_file_path(dir, LocaleKey::BASE);
    let contents = read_file(&path)?;
    parse_base_yaml(&contents, &path.display().to_string())
}

/// What: Load one locale's override file, if present.
///
/// Inputs:
/// - `dir`: Content directory
/// - `locale`: Non-base locale
///
/// Output:
/// - `Ok(None)` when the locale has no file (it then renders as the base)
///
/// # Errors
/// - Returns `ContentError::Io` when the file exists but cannot be read
/// - Returns `ContentError::Parse` when it cannot be parsed
pub fn load_override_file(
    dir: &Path,
    locale: LocaleKey,
) -> Result<Option<ContentOverride>, ContentError> {
    let path = content_file_path(dir, locale);
    if !path.exists() {
        tracing::debug!(
            locale = %locale,
            path = %path.display(),
            "no override file, locale will use base content"
        );
        return Ok(None);
    }
    let contents = read_file(&path)?;
    parse_override_yaml(&contents, &path.display().to_string()).map(Some)
}

/// What: Load base tree and every override from a content directory.
///
/// Inputs:
/// - `dir`: Directory with `{code}.yml` per locale
///
/// Output:
/// - `(base, overrides)` ready for `LocalizedContentStore::build`
///
/// # Errors
/// - Any error from `load_base_file` or `load_override_file`
pub fn load_content_dir(
    dir: &Path,
) -> Result<(ContentTree, BTreeMap<LocaleKey, ContentOverride>), ContentError> {
    let base = load_base_file(dir)?;
    let mut overrides = BTreeMap::new();
    for locale in LocaleKey::ALL.into_iter().filter(|l| !l.is_base()) {
        if let Some(patch) = load_override_file(dir, locale)? {
            overrides.insert(locale, patch);
        }
    }
    tracing::debug!(
        dir = %dir.display(),
        overrides = overrides.len(),
        "loaded content directory"
    );
    Ok((base, overrides))
}

/// What: Parse the embedded base tree and overrides.
///
/// # Errors
/// - Any parse or completeness error in the embedded files
pub fn load_embedded() -> Result<(ContentTree, BTreeMap<LocaleKey, ContentOverride>), ContentError>
{
    let base = parse_base_yaml(EMBEDDED_BASE, "embedded:en")?;
    let mut overrides = BTreeMap::new();
    for locale in LocaleKey::ALL.into_iter().filter(|l| !l.is_base()) {
        let origin = format!("embedded:{locale}");
        overrides.insert(
            locale,
            parse_override_yaml(embedded_source(locale), &origin)?,
        );
    }
    Ok((base, overrides))
}
