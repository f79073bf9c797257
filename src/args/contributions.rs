//! `folio contributions`: summary or detail of the weekly series.

use std::error::Error;
use std::fmt::Write;

use folio::contributions::{ContributionSeries, ContributionSeriesSet};
use folio::settings::OutputFormat;

use crate::args::output::structured;

/// Widest bar drawn in the per-week listing.
const MAX_BAR: usize = 40;

/// What: Render the `contributions` subcommand.
///
/// Inputs:
/// - `set`: Validated contribution data
/// - `series`: Series to list week by week; `None` prints the summary
/// - `format`: Output format
///
/// Output:
/// - Text ready to print
///
/// # Errors
/// - Returns an error when `series` is out of range or serialization fails
pub fn handle_contributions(
    set: &ContributionSeriesSet,
    series: Option<usize>,
    format: OutputFormat,
) -> Result<String, Box<dyn Error>> {
    match series {
        Some(index) => {
            let Some(selected) = set.get(index) else {
                return Err(format!(
                    "series {index} does not exist ({} series available, numbered from 0)",
                    set.len()
                )
                .into());
            };
            match format {
                OutputFormat::Text => Ok(render_series_weeks(index, selected)),
                _ => structured(selected, format),
            }
        }
        None => match format {
            OutputFormat::Text => Ok(render_summary(set)),
            _ => structured(set, format),
        },
    }
}

fn render_summary(set: &ContributionSeriesSet) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<6} {:>5}  {:<10}  {:<10}  {:>6}  peak",
        "series", "weeks", "first", "last", "total"
    );
    for (index, series) in set.series().iter().enumerate() {
        let peak = series.peak();
        let _ = writeln!(
            out,
            "{:<6} {:>5}  {}  {}  {:>6}  {} ({})",
            index,
            series.len(),
            series.first_date(),
            series.last_date(),
            series.total(),
            peak.contribution_count,
            peak.date
        );
    }
    let (first, last) = set.date_span();
    let _ = writeln!(
        out,
        "{} series, {first} .. {last}, {} contributions",
        set.len(),
        set.total()
    );
    out
}

fn render_series_weeks(index: usize, series: &ContributionSeries) -> String {
    let peak = series.peak().contribution_count;
    let mut out = String::new();
    let _ = writeln!(out, "series {index}");
    for week in series.weeks() {
        let width = bar_width(week.contribution_count, peak);
        let _ = writeln!(
            out,
            "{}  {:>4}  {}",
            week.date,
            week.contribution_count,
            "#".repeat(width)
        );
    }
    out
}

/// Bar length for `count` scaled so `peak` spans `MAX_BAR`.
fn bar_width(count: u32, peak: u32) -> usize {
    let count = usize::try_from(count).unwrap_or(usize::MAX);
    let peak = usize::try_from(peak).unwrap_or(usize::MAX).max(1);
    (count.saturating_mul(MAX_BAR) / peak).min(MAX_BAR)
}
