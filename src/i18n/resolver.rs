//! Locale resolution with fallback to the base locale.

use crate::i18n::LocaleKey;
use crate::i18n::detection::detect_system_locale;

/// What: Resolve the effective locale to render.
///
/// Inputs:
/// - `requested`: Locale from the command line or settings (empty string means auto-detect)
///
/// Output:
/// - A supported `LocaleKey`
///
/// Details:
/// - Priority: `requested` -> system locale -> base locale
/// - Region-qualified codes fall back to their language (`ja-JP` -> `ja`)
/// - Anything unsupported resolves to the base locale
#[must_use]
pub fn resolve_locale(requested: &str) -> LocaleKey {
    let requested = requested.trim();
    let initial = if requested.is_empty() {
        if let Some(detected) = detect_system_locale() {
            detected
        } else {
            tracing::debug!(
                "System locale detection failed, using base locale: {}",
                LocaleKey::BASE
            );
            return LocaleKey::BASE;
        }
    } else if is_valid_locale_format(requested) {
        requested.to_string()
    } else {
        tracing::warn!(
            "Invalid locale format: '{}'. Using base locale {}.",
            requested,
            LocaleKey::BASE
        );
        return LocaleKey::BASE;
    };

    if let Some(locale) = match_supported(&initial) {
        if locale.code() != initial {
            tracing::debug!("Locale '{}' resolved to '{}'", initial, locale);
        }
        return locale;
    }

    tracing::warn!(
        "Locale '{}' is not supported, falling back to base locale {}",
        initial,
        LocaleKey::BASE
    );
    LocaleKey::BASE
}

/// What: Match a locale code against the supported set.
///
/// Inputs:
/// - `code`: Locale code such as `ja`, `ja-JP`, or `zh-Hant-TW`
///
/// Output:
/// - The supported locale for the full code, else for its language subtag
#[must_use]
pub fn match_supported(code: &str) -> Option<LocaleKey> {
    LocaleKey::from_code(code).or_else(|| {
        let language = code.split(['-', '_']).next()?;
        LocaleKey::from_code(language)
    })
}

/// What: Validate locale code format.
///
/// Inputs:
/// - `locale`: Locale code to validate
///
/// Output:
/// - `true` if format looks valid, `false` otherwise
///
/// Details:
/// - Allows simple language codes (e.g., "ja") or full codes (e.g., "ja-JP")
/// - Rejects empty strings, spaces, and special characters other than hyphens
fn is_valid_locale_format(locale: &str) -> bool {
    if locale.is_empty() || locale.len() > 20 {
        return false;
    }

    locale.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !locale.starts_with('-')
        && !locale.ends_with('-')
        && !locale.contains("--")
}
