use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::HandicapLookupTable;
use crate::error::PracticeError;
use crate::model::{Aggregate, ShotType, TestResult};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ShotHandicap {
    pub shot_type: ShotType,
    /// `None` when the shot type was not tested.
    pub raw_score: Option<u32>,
    /// `None` when not tested or the lookup table has no row for it.
    pub handicap: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TestScorecard {
    pub date: NaiveDate,
    pub shots: Vec<ShotHandicap>,
    pub shots_tested: usize,
    pub average_handicap: Aggregate,
}

fn lookup_or_skip(table: &HandicapLookupTable, shot_type: ShotType, raw: u32) -> Option<f64> {
    table
        .handicap_for(shot_type, i64::from(raw))
        .map_err(|e: PracticeError| log::warn!("{e}; {shot_type} left without a handicap"))
        .ok()
}

/// Per-shot handicaps for one test, in scorecard order.
#[must_use]
pub fn score_test(table: &HandicapLookupTable, test: &TestResult) -> TestScorecard {
    let shots: Vec<ShotHandicap> = ShotType::ALL
        .iter()
        .map(|&shot_type| {
            let raw_score = test.score(shot_type);
            let handicap = raw_score.and_then(|raw| lookup_or_skip(table, shot_type, raw));
            ShotHandicap {
                shot_type,
                raw_score,
                handicap,
            }
        })
        .collect();
    let handicaps: Vec<f64> = shots.iter().filter_map(|s| s.handicap).collect();
    TestScorecard {
        date: test.date,
        shots_tested: handicaps.len(),
        average_handicap: Aggregate::mean(handicaps),
        shots,
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HistoryPoint {
    pub date: NaiveDate,
    pub average_handicap: f64,
    pub handicaps: BTreeMap<ShotType, f64>,
}

/// Which line the testing history chart follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HistoryMetric {
    #[default]
    Average,
    Shot(ShotType),
}

/// One point per test that produced at least one handicap, oldest first.
#[must_use]
pub fn testing_history(table: &HandicapLookupTable, tests: &[TestResult]) -> Vec<HistoryPoint> {
    let mut points: Vec<HistoryPoint> = tests
        .iter()
        .filter_map(|test| {
            let card = score_test(table, test);
            let average_handicap = card.average_handicap.value()?;
            let handicaps = card
                .shots
                .iter()
                .filter_map(|s| s.handicap.map(|h| (s.shot_type, h)))
                .collect();
            Some(HistoryPoint {
                date: test.date,
                average_handicap,
                handicaps,
            })
        })
        .collect();
    points.sort_by_key(|p| p.date);
    points
}

/// Chart series for `metric` over the last `last_n` points (all when `None`).
/// Tests that skipped the chosen shot type show as gaps.
#[must_use]
pub fn history_series(
    points: &[HistoryPoint],
    metric: HistoryMetric,
    last_n: Option<usize>,
) -> Vec<(NaiveDate, Option<f64>)> {
    let skip = last_n.map_or(0, |n| points.len().saturating_sub(n));
    points
        .iter()
        .skip(skip)
        .map(|p| {
            let value = match metric {
                HistoryMetric::Average => Some(p.average_handicap),
                HistoryMetric::Shot(shot_type) => p.handicaps.get(&shot_type).copied(),
            };
            (p.date, value)
        })
        .collect()
}
