use chrono::NaiveDate;
use serde::Serialize;

use crate::config::ReferenceData;
use crate::error::PracticeError;
use crate::lookup::{
    Direction, HistoryMetric, HistoryPoint, TestScorecard, history_series, score_test,
    testing_history,
};
use crate::model::{ShotType, TestResult};
use crate::stats::rolling_mean;
use crate::storage::{Storage, load_tests};

#[derive(Debug, Serialize)]
pub struct TestingData {
    pub tests_logged: usize,
    /// Most recent test by date.
    pub latest: Option<TestScorecard>,
    pub history: Vec<HistoryPoint>,
    pub series: Vec<(NaiveDate, Option<f64>)>,
    pub rolling: Vec<(NaiveDate, Option<f64>)>,
    pub directions: Vec<(ShotType, Direction)>,
}

/// # Errors
/// Returns an error if the testing records fail to load or `window` is zero.
pub fn get_data_for_testing(
    storage: &dyn Storage,
    reference: &ReferenceData,
    metric: HistoryMetric,
    last_n: Option<usize>,
    window: usize,
) -> Result<TestingData, PracticeError> {
    let tests = load_tests(storage)?;
    build_testing_data(&tests, reference, metric, last_n, window)
}

/// Pure half of [`get_data_for_testing`].
///
/// # Errors
/// Returns `PracticeError::Validation` if `window` is zero.
pub fn build_testing_data(
    tests: &[TestResult],
    reference: &ReferenceData,
    metric: HistoryMetric,
    last_n: Option<usize>,
    window: usize,
) -> Result<TestingData, PracticeError> {
    let table = &reference.lookup;
    let latest = tests
        .iter()
        .enumerate()
        .max_by_key(|(i, t)| (t.date, *i))
        .map(|(_, t)| score_test(table, t));
    let history = testing_history(table, tests);
    let series = history_series(&history, metric, last_n);
    let rolling = rolling_mean(&series, window)?;
    let directions = table
        .shot_types()
        .filter_map(|s| table.direction(s).ok().map(|d| (s, d)))
        .collect();

    Ok(TestingData {
        tests_logged: tests.len(),
        latest,
        history,
        series,
        rolling,
        directions,
    })
}
