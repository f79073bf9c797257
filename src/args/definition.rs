//! Command-line argument definitions.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use folio::i18n::resolve_locale;
use folio::settings::{OutputFormat, Settings};

/// folio - Inspect and validate portfolio content
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Inspect and validate portfolio contribution data and localized content", long_about = None)]
pub struct Args {
    /// What to do
    #[command(subcommand)]
    pub command: Command,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to a file instead of stderr (default: the folio logs directory)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub log_file: Option<Option<PathBuf>>,

    /// Directory with en.yml and per-locale override files (default: embedded content)
    #[arg(long, value_name = "DIR")]
    pub content_dir: Option<PathBuf>,

    /// Weekly contributions JSON file (default: embedded data)
    #[arg(long, value_name = "FILE")]
    pub contributions_file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Summarize the weekly contribution series
    Contributions {
        /// Print every week of this series (zero-based) instead of the summary
        #[arg(short, long)]
        series: Option<usize>,
    },
    /// Print the resolved content for a locale
    Content {
        /// Locale code (default: settings, then system locale, then en)
        #[arg(short, long)]
        locale: Option<String>,
    },
    /// List supported locales
    Locales,
    /// Load and validate all data, exiting non-zero on the first problem
    Check,
}

/// What: Run the selected subcommand.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `settings`: Loaded user settings
///
/// Output:
/// - Text to print on stdout
///
/// # Errors
/// - Any load, validation, or serialization error from the subcommand
///
/// Details:
/// - Flags take precedence over settings for data sources, locale, and output format.
pub fn process_args(args: &Args, settings: &Settings) -> Result<String, Box<dyn Error>> {
    use crate::args::{check, content, contributions, utils};

    let format = utils::determine_output(args, settings);
    match &args.command {
        Command::Contributions { series } => {
            let file = utils::determine_contributions_file(args, settings);
            let set = utils::load_series_set(file)?;
            contributions::handle_contributions(&set, *series, format)
        }
        Command::Content { locale } => {
            let requested = locale.as_deref().unwrap_or(&settings.locale);
            let locale = resolve_locale(requested);
            tracing::debug!(requested, %locale, "resolved content locale");
            let store = utils::load_store(utils::determine_content_dir(args, settings))?;
            content::handle_content(&store, locale, format)
        }
        Command::Locales => content::handle_locales(format),
        Command::Check => check::handle_check(
            utils::determine_contributions_file(args, settings),
            utils::determine_content_dir(args, settings),
            format,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_content_with_locale() {
        let args = Args::try_parse_from(["folio", "--output", "json", "content", "--locale", "ja"])
            .expect("arguments should parse");
        assert_eq!(args.output, Some(OutputFormat::Json));
        assert_eq!(
            args.command,
            Command::Content {
                locale: Some("ja".to_string())
            }
        );
    }

    #[test]
    fn test_log_file_flag_value_is_optional() {
        let bare = Args::try_parse_from(["folio", "--log-file", "--output", "text", "check"])
            .expect("bare --log-file should parse");
        assert_eq!(bare.log_file, Some(None));

        let with_path = Args::try_parse_from(["folio", "--log-file=/tmp/folio.log", "check"])
            .expect("--log-file with value should parse");
        assert_eq!(
            with_path.log_file,
            Some(Some(PathBuf::from("/tmp/folio.log")))
        );

        let absent = Args::try_parse_from(["folio", "check"]).expect("no flag should parse");
        assert_eq!(absent.log_file, None);
    }

    #[test]
    fn test_parse_contributions_series() {
        let args = Args::try_parse_from(["folio", "contributions", "-s", "3"])
            .expect("arguments should parse");
        assert_eq!(args.command, Command::Contributions { series: Some(3) });
    }

    #[test]
    fn test_process_args_falls_back_to_base_locale() {
        let args = Args::try_parse_from(["folio", "content", "--locale", "fr"])
            .expect("arguments should parse");
        let text = process_args(&args, &Settings::default()).expect("content renders");
        assert!(text.starts_with("[EN] Hi there"));
    }

    #[test]
    fn test_process_args_uses_settings_locale() {
        let settings = Settings {
            locale: "ja-JP".to_string(),
            ..Settings::default()
        };
        let args = Args::try_parse_from(["folio", "content"]).expect("arguments should parse");
        let text = process_args(&args, &settings).expect("content renders");
        assert!(text.starts_with("[JA] "));
    }

    #[test]
    fn test_process_args_reports_missing_content_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope");
        let missing = missing.to_str().expect("utf-8 temp path");
        let args = Args::try_parse_from(["folio", "--content-dir", missing, "check"])
            .expect("arguments should parse");
        assert!(process_args(&args, &Settings::default()).is_err());
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Args::try_parse_from(["folio"]).is_err());
    }
}
