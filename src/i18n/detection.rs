//! System locale detection utilities.

use std::env;

/// What: Detect system locale from environment variables.
///
/// Inputs:
/// - None (reads from environment)
///
/// Output:
/// - `Option<String>` containing a locale code (e.g., "ja-JP") or None if not detectable
///
/// Details:
/// - Checks `LC_ALL`, `LC_MESSAGES`, and `LANG` in that order
/// - Skips the `C` and `POSIX` locales, which carry no language
pub fn detect_system_locale() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .find_map(|var_name| env::var(var_name).ok().and_then(|v| parse_locale_string(&v)))
}

/// What: Parse a locale string from environment variables into a standardized format.
///
/// Inputs:
/// - `locale_str`: Locale string like "ja_JP.UTF-8", "en-US", "de_DE@euro"
///
/// Output:
/// - `Option<String>` with standardized format (e.g., "ja-JP") or None if invalid
///
/// Details:
/// - Removes encoding (`.UTF-8`) and modifier (`@euro`) suffixes
/// - Converts underscores to hyphens; language lowercase, region uppercase
pub fn parse_locale_string(locale_str: &str) -> Option<String> {
    let trimmed = locale_str.trim();
    let locale_part = trimmed.split(['.', '@']).next()?;
    if locale_part.is_empty() || locale_part == "C" || locale_part == "POSIX" {
        return None;
    }

    let normalized = locale_part.replace('_', "-");
    let parts: Vec<&str> = normalized.split('-').collect();
    match parts.as_slice() {
        [language] => Some(language.to_lowercase()),
        [language, region] => Some(format!(
            "{}-{}",
            language.to_lowercase(),
            region.to_uppercase()
        )),
        [language, script, region] => Some(format!(
            "{}-{}-{}",
            language.to_lowercase(),
            script,
            region.to_uppercase()
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale_string() {
        assert_eq!(parse_locale_string("ja_JP.UTF-8"), Some("ja-JP".to_string()));
        assert_eq!(parse_locale_string("en_US.utf8"), Some("en-US".to_string()));
        assert_eq!(parse_locale_string("de_DE@euro"), Some("de-DE".to_string()));
        assert_eq!(parse_locale_string("en"), Some("en".to_string()));
        assert_eq!(
            parse_locale_string("zh_Hant_tw"),
            Some("zh-Hant-TW".to_string())
        );
        assert_eq!(parse_locale_string(""), None);
        assert_eq!(parse_locale_string("C"), None);
        assert_eq!(parse_locale_string("POSIX"), None);
        assert_eq!(parse_locale_string("C.UTF-8"), None);
        assert_eq!(parse_locale_string("a_b_c_d"), None);
    }
}
