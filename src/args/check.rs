//! `folio check`: load every data source and report what was validated.

use std::error::Error;
use std::fmt::Write;
use std::path::Path;

use chrono::NaiveDate;
use folio::i18n::{LocaleKey, LocalizedContentStore, NAME_PLACEHOLDER};
use folio::settings::OutputFormat;
use serde::Serialize;

use crate::args::output::structured;
use crate::args::utils::{describe_source, load_series_set, load_store};

/// Result of a successful check.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckReport {
    contributions: ContributionsReport,
    content: ContentReport,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContributionsReport {
    source: String,
    series: usize,
    weeks: usize,
    first_date: NaiveDate,
    last_date: NaiveDate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContentReport {
    source: String,
    locales: Vec<LocaleKey>,
    projects: usize,
    /// Locales whose intro lost the name token present in the base.
    missing_placeholder: Vec<LocaleKey>,
}

/// What: Validate contribution data and localized content.
///
/// Inputs:
/// - `contributions_file`: JSON file, or `None` for embedded data
/// - `content_dir`: Content directory, or `None` for embedded content
/// - `format`: Output format
///
/// Output:
/// - Report text when both sources load
///
/// # Errors
/// - The first `DataShapeError` or `ContentError` encountered
///
/// Details:
/// - A locale whose intro drops the `{myname}` token is reported as a warning, not an error.
pub fn handle_check(
    contributions_file: Option<&Path>,
    content_dir: Option<&Path>,
    format: OutputFormat,
) -> Result<String, Box<dyn Error>> {
    let set = load_series_set(contributions_file)?;
    let (first_date, last_date) = set.date_span();
    let contributions = ContributionsReport {
        source: describe_source(contributions_file),
        series: set.len(),
        weeks: set.series().iter().map(|s| s.len()).sum(),
        first_date,
        last_date,
    };

    let store = load_store(content_dir)?;
    let missing_placeholder = placeholder_gaps(&store);
    for locale in &missing_placeholder {
        tracing::warn!(%locale, token = NAME_PLACEHOLDER, "intro paragraphs no longer contain the name token");
    }
    let content = ContentReport {
        source: describe_source(content_dir),
        locales: store.locales().to_vec(),
        projects: store.base().projects.projects.len(),
        missing_placeholder,
    };

    let report = CheckReport {
        contributions,
        content,
    };
    tracing::info!(
        series = report.contributions.series,
        locales = report.content.locales.len(),
        "check passed"
    );
    match format {
        OutputFormat::Text => Ok(render_report(&report)),
        _ => structured(&report, format),
    }
}

fn placeholder_gaps(store: &LocalizedContentStore) -> Vec<LocaleKey> {
    let has_token =
        |paragraphs: &[String]| paragraphs.iter().any(|p| p.contains(NAME_PLACEHOLDER));
    if !has_token(&store.base().intro.paragraphs) {
        return Vec::new();
    }
    store
        .iter()
        .filter(|(_, tree)| !has_token(&tree.intro.paragraphs))
        .map(|(locale, _)| locale)
        .collect()
}

fn render_report(report: &CheckReport) -> String {
    let c = &report.contributions;
    let t = &report.content;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "contributions ({}): {} series, {} weeks, {} .. {}",
        c.source, c.series, c.weeks, c.first_date, c.last_date
    );
    let codes: Vec<&str> = t.locales.iter().map(|l| l.code()).collect();
    let _ = writeln!(
        out,
        "content ({}): locales {}, {} projects",
        t.source,
        codes.join(", "),
        t.projects
    );
    for locale in &t.missing_placeholder {
        let _ = writeln!(out, "warning: {locale} intro has no {NAME_PLACEHOLDER} token");
    }
    let _ = writeln!(out, "ok");
    out
}
