//! Integration tests for the weekly contribution series.

#![cfg(test)]

use std::fs;

use chrono::NaiveDate;
use folio::contributions::{ContributionSeriesSet, DataShapeError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
/// What: The embedded table has seven weekly series with ordered dates.
///
/// Details:
/// - Series start on consecutive days so each one tracks a weekday.
fn integration_embedded_series_shape() {
    let set = ContributionSeriesSet::embedded().expect("embedded data is valid");
    assert_eq!(set.len(), 7);

    let lengths: Vec<usize> = set.series().iter().map(|s| s.len()).collect();
    assert_eq!(lengths, vec![53, 53, 53, 53, 52, 52, 52]);

    for (i, series) in set.series().iter().enumerate() {
        let offset = u32::try_from(i).expect("small index");
        assert_eq!(series.first_date(), date(2022, 8, 14 + offset));
        for pair in series.weeks().windows(2) {
            assert_eq!((pair[1].date - pair[0].date).num_days(), 7);
        }
    }
    assert_eq!(set.date_span(), (date(2022, 8, 14), date(2023, 8, 16)));
}

#[test]
/// What: Totals add up across series.
fn integration_totals_are_consistent() {
    let set = ContributionSeriesSet::embedded().expect("embedded data is valid");
    let by_series: u64 = set.series().iter().map(|s| s.total()).sum();
    assert_eq!(set.total(), by_series);
    for series in set.series() {
        let peak = series.peak();
        assert!(
            series
                .weeks()
                .iter()
                .all(|w| w.contribution_count <= peak.contribution_count)
        );
    }
}

#[test]
/// What: Loading from a file validates like the embedded table.
fn integration_load_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let good = dir.path().join("good.json");
    fs::write(
        &good,
        r#"[[{"contributionCount": 3, "date": "2023-01-01"}, {"contributionCount": 0, "date": "2023-01-08"}]]"#,
    )
    .expect("write file");
    let set = ContributionSeriesSet::load(&good).expect("valid file");
    assert_eq!(set.total(), 3);

    let unordered = dir.path().join("unordered.json");
    fs::write(
        &unordered,
        r#"[[{"contributionCount": 1, "date": "2023-01-08"}, {"contributionCount": 1, "date": "2023-01-01"}]]"#,
    )
    .expect("write file");
    assert!(matches!(
        ContributionSeriesSet::load(&unordered),
        Err(DataShapeError::NonIncreasingDate { series: 0, week: 1, .. })
    ));

    assert!(matches!(
        ContributionSeriesSet::load(&dir.path().join("absent.json")),
        Err(DataShapeError::Io(_))
    ));
}

#[test]
/// What: An empty top-level array is rejected.
fn integration_empty_set_is_rejected() {
    assert!(matches!(
        ContributionSeriesSet::from_json_str("[]"),
        Err(DataShapeError::EmptySet)
    ));
}
