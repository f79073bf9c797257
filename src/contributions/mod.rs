//! Weekly contribution series consumed by the activity chart.
//!
//! # Overview
//!
//! The data is a set of parallel weekly calendars. Each series is an ordered
//! list of `(date, contributionCount)` records; series are kept in source order
//! because the chart labels them by position.
//!
//! Every series is checked once when the set is built:
//! - the set and every series are non-empty
//! - counts are non-negative
//! - dates are strictly increasing with a 7 day stride
//!
//! A set that fails any check is rejected with a `DataShapeError`. Once built,
//! a `ContributionSeriesSet` is immutable and can be shared across threads.
//!
//! # Usage
//!
//! ```rust,no_run
//! use folio::contributions::ContributionSeriesSet;
//!
//! let set = ContributionSeriesSet::embedded()?;
//! for (index, series) in set.series().iter().enumerate() {
//!     println!("series {index}: {} contributions", series.total());
//! }
//! # Ok::<(), folio::contributions::DataShapeError>(())
//! ```

pub mod data;
mod error;
pub mod validate;

use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

pub use error::DataShapeError;
pub use validate::{WEEK_STRIDE_DAYS, validate_series_set};

/// One week of activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionWeek {
    /// First day of the week.
    pub date: NaiveDate,
    /// Contributions recorded during the week.
    pub contribution_count: u32,
}

/// What: Validated weekly series.
///
/// Details:
/// - Only built through validation, so it is never empty and its dates are
///   strictly increasing with a 7 day stride.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContributionSeries {
    weeks: Vec<ContributionWeek>,
}

impl ContributionSeries {
    /// Weeks in chronological order.
    #[must_use]
    pub fn weeks(&self) -> &[ContributionWeek] {
        &self.weeks
    }

    /// Number of weeks in the series.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.weeks.len()
    }

    /// Always `false` for a validated series.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Date of the first week.
    #[must_use]
    pub fn first_date(&self) -> NaiveDate {
        self.weeks[0].date
    }

    /// Date of the last week.
    #[must_use]
    pub fn last_date(&self) -> NaiveDate {
        self.weeks[self.weeks.len() - 1].date
    }

    /// Sum of all weekly counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.weeks
            .iter()
            .map(|week| u64::from(week.contribution_count))
            .sum()
    }

    /// What: Week with the highest count.
    ///
    /// Output:
    /// - The busiest week; the earliest one wins a tie
    #[must_use]
    pub fn peak(&self) -> ContributionWeek {
        self.weeks
            .iter()
            .skip(1)
            .fold(self.weeks[0], |best, week| {
                if week.contribution_count > best.contribution_count {
                    *week
                } else {
                    best
                }
            })
    }
}

/// What: Ordered collection of validated weekly series.
///
/// Details:
/// - Position in the set is meaningful (external series label).
/// - Series are independent and need not share dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContributionSeriesSet {
    series: Vec<ContributionSeries>,
}

impl ContributionSeriesSet {
    /// What: Build the set from the table compiled into the binary.
    ///
    /// # Errors
    /// - Returns `DataShapeError` when the embedded table is malformed
    pub fn embedded() -> Result<Self, DataShapeError> {
        Self::from_json_str(data::EMBEDDED_CONTRIBUTIONS)
    }

    /// What: Build the set from JSON text.
    ///
    /// Inputs:
    /// - `json`: Array of arrays of `{ "contributionCount", "date" }` records
    ///
    /// # Errors
    /// - Returns `DataShapeError::Parse` for malformed JSON
    /// - Returns any shape violation reported by `validate_series_set`
    pub fn from_json_str(json: &str) -> Result<Self, DataShapeError> {
        let raw = data::parse_series_json(json)?;
        Self::from_raw(raw)
    }

    /// What: Build the set from a JSON file.
    ///
    /// # Errors
    /// - Returns `DataShapeError::Io` when the file cannot be read
    /// - Otherwise as `from_json_str`
    pub fn load(path: &Path) -> Result<Self, DataShapeError> {
        let raw = data::load_series_file(path)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: Vec<Vec<data::RawWeek>>) -> Result<Self, DataShapeError> {
        let series = validate_series_set(raw)?;
        tracing::debug!(series = series.len(), "contribution series set loaded");
        Ok(Self { series })
    }

    /// All series, in label order.
    #[must_use]
    pub fn series(&self) -> &[ContributionSeries] {
        &self.series
    }

    /// Series at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ContributionSeries> {
        self.series.get(index)
    }

    /// Number of series.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.series.len()
    }

    /// Always `false` for a validated set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Sum of all counts across every series.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.series.iter().map(ContributionSeries::total).sum()
    }

    /// What: Earliest and latest week date across the whole set.
    ///
    /// Output:
    /// - `(first, last)`
    #[must_use]
    pub fn date_span(&self) -> (NaiveDate, NaiveDate) {
        let first = self.series[0].first_date();
        let last = self.series[0].last_date();
        self.series
            .iter()
            .skip(1)
            .fold((first, last), |(first, last), series| {
                (first.min(series.first_date()), last.max(series.last_date()))
            })
    }
}
