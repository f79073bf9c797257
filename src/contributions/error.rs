//! Error type for contribution data that violates its shape invariants.

use std::fmt;

use chrono::NaiveDate;

/// What: Error raised when weekly contribution data cannot be accepted.
///
/// Inputs: Generated by the loaders and `validate_series_set`.
///
/// Output: Implements `Display`/`Error` for ergonomic propagation.
///
/// Details:
/// - Every variant is fatal for the affected data set; counts are never clamped.
/// - Indices are zero-based: `series` is the position in the set, `week` the
///   position inside that series.
#[derive(Debug)]
pub enum DataShapeError {
    /// The set contains no series at all.
    EmptySet,
    /// A series contains no weeks.
    EmptySeries {
        /// Index of the empty series.
        series: usize,
    },
    /// A week carries a negative contribution count.
    NegativeCount {
        /// Index of the offending series.
        series: usize,
        /// Index of the offending week.
        week: usize,
        /// Raw value read from the source.
        count: i64,
    },
    /// A week carries a count too large to store.
    CountOverflow {
        /// Index of the offending series.
        series: usize,
        /// Index of the offending week.
        week: usize,
        /// Raw value read from the source.
        count: i64,
    },
    /// A week is not strictly after the previous one.
    NonIncreasingDate {
        /// Index of the offending series.
        series: usize,
        /// Index of the offending week.
        week: usize,
        /// Date of the previous week.
        previous: NaiveDate,
        /// Date of the offending week.
        current: NaiveDate,
    },
    /// Two consecutive weeks are not exactly seven days apart.
    IrregularStride {
        /// Index of the offending series.
        series: usize,
        /// Index of the offending week.
        week: usize,
        /// Observed gap in days.
        days: i64,
    },
    /// The source text could not be parsed.
    Parse(serde_json::Error),
    /// The source file could not be read.
    Io(std::io::Error),
}

impl fmt::Display for DataShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySet => write!(f, "contribution data contains no series"),
            Self::EmptySeries { series } => write!(f, "series {series} contains no weeks"),
            Self::NegativeCount {
                series,
                week,
                count,
            } => write!(
                f,
                "series {series}, week {week}: contribution count {count} is negative"
            ),
            Self::CountOverflow {
                series,
                week,
                count,
            } => write!(
                f,
                "series {series}, week {week}: contribution count {count} is out of range"
            ),
            Self::NonIncreasingDate {
                series,
                week,
                previous,
                current,
            } => write!(
                f,
                "series {series}, week {week}: date {current} does not follow {previous}"
            ),
            Self::IrregularStride { series, week, days } => write!(
                f,
                "series {series}, week {week}: expected a 7 day stride, found {days} days"
            ),
            Self::Parse(err) => write!(f, "failed to parse contribution data: {err}"),
            Self::Io(err) => write!(f, "failed to read contribution data: {err}"),
        }
    }
}

impl std::error::Error for DataShapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DataShapeError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<std::io::Error> for DataShapeError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
