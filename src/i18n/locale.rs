//! Supported locale keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::i18n::ContentError;

/// What: Closed set of locales the content is published in.
///
/// Details:
/// - `En` is the base locale: its content tree is authored in full and every
///   other locale is expressed as overrides on top of it.
/// - Serialized as the lowercase code (`en`, `ja`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleKey {
    /// English (base locale).
    #[default]
    En,
    /// Japanese.
    Ja,
}

impl LocaleKey {
    /// The locale whose content tree must be schema-complete.
    pub const BASE: Self = Self::En;

    /// Every supported locale, base first.
    pub const ALL: [Self; 2] = [Self::En, Self::Ja];

    /// Lowercase code used in file names and on the command line.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
        }
    }

    /// Short label shown by a locale switcher.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Ja => "JA",
        }
    }

    /// Whether this is the base locale.
    #[must_use]
    pub const fn is_base(self) -> bool {
        matches!(self, Self::En)
    }

    /// What: Look up a locale by its code.
    ///
    /// Inputs:
    /// - `code`: Locale code; matching is case-insensitive and ignores
    ///   surrounding whitespace
    ///
    /// Output:
    /// - `Some(LocaleKey)` for a supported code, `None` otherwise
    ///
    /// Details:
    /// - Only bare language codes match; region-qualified codes such as
    ///   `ja-JP` are handled by `resolve_locale`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for LocaleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LocaleKey {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| ContentError::UnknownLocale(s.trim().to_string()))
    }
}
