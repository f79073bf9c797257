//! Error type for building and querying localized content.

use std::fmt;
use std::path::PathBuf;

use crate::i18n::LocaleKey;

/// What: Error raised while loading, merging, or looking up localized content.
///
/// Inputs: Generated by the loader, the merge step, and store lookups.
///
/// Output: Implements `Display`/`Error` for ergonomic propagation.
///
/// Details:
/// - `UnknownLocale` is the only variant a caller is expected to recover from
///   (typically by falling back to the base locale).
/// - The other variants indicate broken content and are fatal at build time.
#[derive(Debug)]
pub enum ContentError {
    /// An override list patches an index the base list does not have.
    MergeIndexOutOfBounds {
        /// Locale whose override is at fault.
        locale: LocaleKey,
        /// Dotted path of the list (e.g. `projects.projects`).
        path: String,
        /// Offending index.
        index: usize,
        /// Length of the base list.
        len: usize,
    },
    /// A resolved tree lacks a required field.
    SchemaIncomplete {
        /// Locale whose tree is incomplete.
        locale: LocaleKey,
        /// Dotted path of the missing field.
        path: String,
    },
    /// The requested locale is not supported.
    UnknownLocale(String),
    /// A content file could not be parsed.
    Parse {
        /// Where the text came from (file path or `embedded:<locale>`).
        origin: String,
        /// Underlying YAML error.
        error: serde_norway::Error,
    },
    /// A content file could not be read.
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        error: std::io::Error,
    },
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MergeIndexOutOfBounds {
                locale,
                path,
                index,
                len,
            } => write!(
                f,
                "override for '{locale}' patches {path}[{index}] but the base list has {len} entries"
            ),
            Self::SchemaIncomplete { locale, path } => {
                write!(f, "content for '{locale}' is missing required field {path}")
            }
            Self::UnknownLocale(code) => write!(
                f,
                "unsupported locale '{code}' (supported: {})",
                LocaleKey::ALL.map(LocaleKey::code).join(", ")
            ),
            Self::Parse { origin, error } => {
                write!(f, "failed to parse content from {origin}: {error}")
            }
            Self::Io { path, error } => {
                write!(f, "failed to read content file {}: {error}", path.display())
            }
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse { error, .. } => Some(error),
            Self::Io { error, .. } => Some(error),
            Self::MergeIndexOutOfBounds { .. }
            | Self::SchemaIncomplete { .. }
            | Self::UnknownLocale(_) => None,
        }
    }
}
