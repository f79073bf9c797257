//! Shape checks applied to raw contribution data before it is exposed.

use crate::contributions::data::RawWeek;
use crate::contributions::{ContributionSeries, ContributionWeek, DataShapeError};

/// Days between two consecutive weeks of a series.
pub const WEEK_STRIDE_DAYS: i64 = 7;

/// What: Validate raw series and convert them into typed series.
///
/// Inputs:
/// - `raw`: Series as read from the source, in source order
///
/// Output:
/// - Typed series in the same order
///
/// # Errors
/// - `EmptySet` when `raw` is empty
/// - `EmptySeries` when any series has no weeks
/// - `NegativeCount` / `CountOverflow` when a count does not fit `u32`
/// - `NonIncreasingDate` when a date does not come after its predecessor
/// - `IrregularStride` when two consecutive dates are not 7 days apart
///
/// Details:
/// - The first violation found aborts validation; nothing is clamped or skipped.
pub fn validate_series_set(raw: Vec<Vec<RawWeek>>) -> Result<Vec<ContributionSeries>, DataShapeError> {
    if raw.is_empty() {
        return Err(DataShapeError::EmptySet);
    }
    raw.into_iter()
        .enumerate()
        .map(|(index, weeks)| validate_series(index, weeks))
        .collect()
}

/// What: Validate one raw series.
///
/// Inputs:
/// - `series`: Index of the series within its set (for diagnostics)
/// - `raw`: Weeks of the series
///
/// Output:
/// - Typed series
///
/// # Errors
/// - See `validate_series_set`
pub fn validate_series(series: usize, raw: Vec<RawWeek>) -> Result<ContributionSeries, DataShapeError> {
    if raw.is_empty() {
        return Err(DataShapeError::EmptySeries { series });
    }

    let mut weeks: Vec<ContributionWeek> = Vec::with_capacity(raw.len());
    for (week, entry) in raw.into_iter().enumerate() {
        let count = convert_count(series, week, entry.contribution_count)?;
        if let Some(previous) = weeks.last() {
            let days = (entry.date - previous.date).num_days();
            if days <= 0 {
                return Err(DataShapeError::NonIncreasingDate {
                    series,
                    week,
                    previous: previous.date,
                    current: entry.date,
                });
            }
            if days != WEEK_STRIDE_DAYS {
                return Err(DataShapeError::IrregularStride { series, week, days });
            }
        }
        weeks.push(ContributionWeek {
            date: entry.date,
            contribution_count: count,
        });
    }

    tracing::trace!(series, weeks = weeks.len(), "validated contribution series");
    Ok(ContributionSeries { weeks })
}

fn convert_count(series: usize, week: usize, count: i64) -> Result<u32, DataShapeError> {
    if count < 0 {
        return Err(DataShapeError::NegativeCount {
            series,
            week,
            count,
        });
    }
    u32::try_from(count).map_err(|_| DataShapeError::CountOverflow {
        series,
        week,
        count,
    })
}
