//! User settings for the folio command-line tool.
//!
//! Settings live in `settings.conf` under `$XDG_CONFIG_HOME/folio/` or
//! `$HOME/.config/folio/`, one `key = value` per line:
//!
//! ```text
//! locale = ja
//! content_dir = /srv/folio/locales
//! contributions_file = /srv/folio/weekly_contributions.json
//! log_level = info
//! output = text
//! ```
//!
//! A missing or unreadable file is not an error: defaults are used and the
//! problem is logged. Command-line flags take precedence over the file.

mod parse;
mod paths;

use std::fs;
use std::path::{Path, PathBuf};

pub use parse::parse_settings;
pub use paths::{SETTINGS_FILE, logs_dir};

/// How command output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

impl OutputFormat {
    /// What: Parse an output format from a settings value.
    ///
    /// Inputs:
    /// - `val`: Value such as `json` or `YAML`
    ///
    /// Output:
    /// - `Some(OutputFormat)` for a known value, `None` otherwise
    #[must_use]
    pub fn from_config_key(val: &str) -> Option<Self> {
        match val.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Some(Self::Text),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Effective user settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Preferred locale code; empty means detect from the environment.
    pub locale: String,
    /// Directory with `{code}.yml` content files; `None` uses embedded content.
    pub content_dir: Option<PathBuf>,
    /// Contribution JSON file; `None` uses embedded data.
    pub contributions_file: Option<PathBuf>,
    /// Default log level.
    pub log_level: String,
    /// Default output format.
    pub output: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: String::new(),
            content_dir: None,
            contributions_file: None,
            log_level: "info".to_string(),
            output: OutputFormat::Text,
        }
    }
}

/// What: Load settings from the user's settings file.
///
/// Output:
/// - Parsed settings, or defaults when no file exists
///
/// Details:
/// - Never fails; read errors are logged and defaults returned.
#[must_use]
pub fn settings() -> Settings {
    match paths::resolve_settings_config_path() {
        Some(path) => load_settings_from(&path),
        None => {
            tracing::debug!("no {SETTINGS_FILE} found, using default settings");
            Settings::default()
        }
    }
}

/// What: Load settings from a specific file.
///
/// Inputs:
/// - `path`: Settings file
///
/// Output:
/// - Parsed settings, or defaults when the file cannot be read
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            parse_settings(&content, &mut out);
            tracing::debug!(path = %path.display(), "settings loaded");
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to read settings file, using defaults"
            );
        }
    }
    out
}
