use std::path::PathBuf;

use crate::settings::{OutputFormat, Settings};

/// Log levels accepted by `log_level`.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// What: Strip a trailing `#` or `//` comment from a value.
///
/// Inputs:
/// - `s`: Raw value text after `=`
///
/// Output:
/// - Trimmed value without the comment
///
/// Details:
/// - A comment marker only counts at the start or after whitespace, so
///   `https://...` and `a#b` survive intact.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut cut = s.len();
    for (i, &b) in bytes.iter().enumerate() {
        let at_boundary = i == 0 || bytes[i - 1].is_ascii_whitespace();
        if at_boundary && (b == b'#' || (b == b'/' && bytes.get(i + 1) == Some(&b'/'))) {
            cut = i;
            break;
        }
    }
    s[..cut].trim()
}

/// What: Parse `settings.conf` content into `Settings`.
///
/// Inputs:
/// - `content`: Content of the settings file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - One `key = value` per line; blank lines and `#`/`//` comment lines are skipped.
/// - Keys are case-insensitive and `-`, `.`, and spaces are treated as `_`.
/// - Invalid values keep the current value and log a warning; unknown keys are
///   logged at debug level and ignored.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(val_raw);
        match key.as_str() {
            "locale" | "language" => {
                settings.locale = val.to_string();
            }
            "content_dir" | "locales_dir" => {
                settings.content_dir = non_empty_path(val);
            }
            "contributions_file" | "contributions" => {
                settings.contributions_file = non_empty_path(val);
            }
            "log_level" => {
                let lv = val.to_ascii_lowercase();
                if LOG_LEVELS.contains(&lv.as_str()) {
                    settings.log_level = lv;
                } else {
                    tracing::warn!(value = val, "invalid log_level in settings, keeping default");
                }
            }
            "output" | "output_format" => match OutputFormat::from_config_key(val) {
                Some(format) => settings.output = format,
                None => {
                    tracing::warn!(value = val, "invalid output format in settings, keeping default");
                }
            },
            _ => {
                tracing::debug!(key = %key, "ignoring unknown settings key");
            }
        }
    }
}

fn non_empty_path(val: &str) -> Option<PathBuf> {
    (!val.is_empty()).then(|| PathBuf::from(val))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Ensure inline comments are stripped only at word boundaries.
    fn test_strip_inline_comment() {
        assert_eq!(strip_inline_comment(" ja # preferred"), "ja");
        assert_eq!(strip_inline_comment("ja // preferred"), "ja");
        assert_eq!(strip_inline_comment("#all comment"), "");
        assert_eq!(
            strip_inline_comment("https://example.com/a#b"),
            "https://example.com/a#b"
        );
    }

    #[test]
    /// What: Parse every supported key with alternate spellings and comments.
    fn test_parse_settings_all_keys() {
        let content = "\
# folio settings
locale = ja
Content-Dir = /srv/folio/locales   # override embedded copy
contributions.file = /srv/folio/weekly.json
log_level = DEBUG
output = yaml
";
        let mut settings = Settings::default();
        parse_settings(content, &mut settings);
        assert_eq!(settings.locale, "ja");
        assert_eq!(settings.content_dir, Some(PathBuf::from("/srv/folio/locales")));
        assert_eq!(
            settings.contributions_file,
            Some(PathBuf::from("/srv/folio/weekly.json"))
        );
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.output, OutputFormat::Yaml);
    }

    #[test]
    /// What: Invalid values and unknown keys leave defaults untouched.
    fn test_parse_settings_keeps_defaults_on_bad_values() {
        let content = "log_level = loud\noutput = xml\ncolour = blue\nnot a setting\n";
        let mut settings = Settings::default();
        parse_settings(content, &mut settings);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    /// What: An empty path value clears a previously set path.
    fn test_parse_settings_empty_path() {
        let mut settings = Settings {
            content_dir: Some(PathBuf::from("/tmp")),
            ..Settings::default()
        };
        parse_settings("content_dir =\n", &mut settings);
        assert_eq!(settings.content_dir, None);
    }
}
