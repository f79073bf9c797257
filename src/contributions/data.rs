//! Raw contribution records and the sources they are read from.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::contributions::DataShapeError;

/// Weekly contribution table compiled into the binary.
pub const EMBEDDED_CONTRIBUTIONS: &str = include_str!("../../data/weekly_contributions.json");

/// One week as written in the source, before any invariant is checked.
///
/// The count is signed so that negative values surface as
/// `DataShapeError::NegativeCount` instead of a generic parse failure.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawWeek {
    /// Week start date.
    pub date: NaiveDate,
    /// Contributions recorded for the week.
    pub contribution_count: i64,
}

/// What: Parse contribution JSON into raw, unvalidated series.
///
/// Inputs:
/// - `json`: Array of arrays of `{ "contributionCount": n, "date": "YYYY-MM-DD" }`
///
/// Output:
/// - Raw series in source order
///
/// # Errors
/// - Returns `DataShapeError::Parse` when the text is not valid JSON of that shape
pub fn parse_series_json(json: &str) -> Result<Vec<Vec<RawWeek>>, DataShapeError> {
    Ok(serde_json::from_str(json)?)
}

/// What: Read and parse a contribution JSON file.
///
/// Inputs:
/// - `path`: File holding the series table
///
/// Output:
/// - Raw series in source order
///
/// # Errors
/// - Returns `DataShapeError::Io` when the file cannot be read
/// - Returns `DataShapeError::Parse` when its content cannot be parsed
pub fn load_series_file(path: &Path) -> Result<Vec<Vec<RawWeek>>, DataShapeError> {
    let contents = fs::read_to_string(path)?;
    tracing::debug!(
        path = %path.display(),
        bytes = contents.len(),
        "read contribution data file"
    );
    parse_series_json(&contents)
}
