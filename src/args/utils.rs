//! Shared utilities for argument processing.

use std::path::Path;

use folio::contributions::{ContributionSeriesSet, DataShapeError};
use folio::i18n::{ContentError, LocalizedContentStore};
use folio::logging::{LOG_FILE_NAME, LogTarget};
use folio::settings::{OutputFormat, Settings, logs_dir};

use crate::args::Args;

/// What: Determine the log level based on command-line arguments and settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Loaded user settings.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides everything.
/// - `--log-level` overrides the settings file.
pub fn determine_log_level(args: &Args, settings: &Settings) -> String {
    if args.verbose {
        "debug".to_string()
    } else if let Some(level) = &args.log_level {
        level.to_ascii_lowercase()
    } else {
        settings.log_level.clone()
    }
}

/// What: Determine where logs are written.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - `LogTarget::File` when `--log-file` is given (bare flag uses the logs directory),
///   `LogTarget::Stderr` otherwise.
pub fn determine_log_target(args: &Args) -> LogTarget {
    match &args.log_file {
        Some(Some(path)) => LogTarget::File(path.clone()),
        Some(None) => LogTarget::File(logs_dir().join(LOG_FILE_NAME)),
        None => LogTarget::Stderr,
    }
}

/// Output format: flag first, then settings.
pub fn determine_output(args: &Args, settings: &Settings) -> OutputFormat {
    args.output.unwrap_or(settings.output)
}

/// Content directory: flag first, then settings; `None` means embedded.
pub fn determine_content_dir<'a>(args: &'a Args, settings: &'a Settings) -> Option<&'a Path> {
    args.content_dir
        .as_deref()
        .or(settings.content_dir.as_deref())
}

/// Contribution file: flag first, then settings; `None` means embedded.
pub fn determine_contributions_file<'a>(
    args: &'a Args,
    settings: &'a Settings,
) -> Option<&'a Path> {
    args.contributions_file
        .as_deref()
        .or(settings.contributions_file.as_deref())
}

/// What: Load the contribution set from a file or the embedded table.
///
/// # Errors
/// - Any `DataShapeError` from loading or validation
pub fn load_series_set(file: Option<&Path>) -> Result<ContributionSeriesSet, DataShapeError> {
    match file {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading contribution data from file");
            ContributionSeriesSet::load(path)
        }
        None => ContributionSeriesSet::embedded(),
    }
}

/// What: Build the content store from a directory or the embedded content.
///
/// # Errors
/// - Any `ContentError` from loading, merging, or completeness checks
pub fn load_store(dir: Option<&Path>) -> Result<LocalizedContentStore, ContentError> {
    match dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "loading content from directory");
            LocalizedContentStore::load_dir(dir)
        }
        None => LocalizedContentStore::embedded(),
    }
}

/// Display form of an optional path for log fields.
pub fn describe_source(path: Option<&Path>) -> String {
    path.map_or_else(|| "embedded".to_string(), |p| p.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).expect("arguments should parse")
    }

    #[test]
    fn test_log_level_precedence() {
        let settings = Settings {
            log_level: "warn".to_string(),
            ..Settings::default()
        };
        assert_eq!(determine_log_level(&parse(&["folio", "check"]), &settings), "warn");
        assert_eq!(
            determine_log_level(&parse(&["folio", "--log-level", "TRACE", "check"]), &settings),
            "trace"
        );
        assert_eq!(
            determine_log_level(&parse(&["folio", "-v", "--log-level", "error", "check"]), &settings),
            "debug"
        );
    }

    #[test]
    fn test_log_target() {
        assert_eq!(determine_log_target(&parse(&["folio", "check"])), LogTarget::Stderr);
        assert_eq!(
            determine_log_target(&parse(&["folio", "--log-file=/tmp/x.log", "check"])),
            LogTarget::File(PathBuf::from("/tmp/x.log"))
        );
        match determine_log_target(&parse(&["folio", "--log-file", "-v", "check"])) {
            LogTarget::File(path) => assert!(path.ends_with(LOG_FILE_NAME)),
            LogTarget::Stderr => panic!("bare --log-file should target a file"),
        }
    }

    #[test]
    fn test_flags_override_settings() {
        let settings = Settings {
            content_dir: Some(PathBuf::from("/from/settings")),
            output: OutputFormat::Yaml,
            ..Settings::default()
        };
        let args = parse(&["folio", "--content-dir", "/from/flag", "-o", "json", "check"]);
        assert_eq!(
            determine_content_dir(&args, &settings),
            Some(Path::new("/from/flag"))
        );
        assert_eq!(determine_output(&args, &settings), OutputFormat::Json);

        let args = parse(&["folio", "check"]);
        assert_eq!(
            determine_content_dir(&args, &settings),
            Some(Path::new("/from/settings"))
        );
        assert_eq!(determine_contributions_file(&args, &settings), None);
        assert_eq!(determine_output(&args, &settings), OutputFormat::Yaml);
    }

    #[test]
    fn test_describe_source() {
        assert_eq!(describe_source(None), "embedded");
        assert_eq!(describe_source(Some(Path::new("/a/b"))), "/a/b");
    }
}
