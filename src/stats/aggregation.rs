use ahash::RandomState;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::error::PracticeError;
use crate::model::{Category, Dated, PracticeRecord, same_month, week_start};

#[must_use]
pub fn sessions_this_month<T: Dated>(sessions: &[T], reference_date: NaiveDate) -> usize {
    sessions
        .iter()
        .filter(|s| same_month(s.date(), reference_date))
        .count()
}

/// Sessions in the Monday-to-Sunday week containing `reference_date`.
#[must_use]
pub fn sessions_this_week<T: Dated>(sessions: &[T], reference_date: NaiveDate) -> usize {
    let start = week_start(reference_date);
    let end = start + Duration::days(6);
    sessions
        .iter()
        .filter(|s| (start..=end).contains(&s.date()))
        .count()
}

/// Trailing mean over exactly `window` values; the first `window - 1` positions are omitted.
///
/// # Errors
/// Returns `PracticeError::Validation` if `window` is zero or longer than the series.
pub fn moving_average(
    series: &[(NaiveDate, f64)],
    window: usize,
) -> Result<Vec<(NaiveDate, f64)>, PracticeError> {
    if window < 1 || window > series.len() {
        return Err(PracticeError::validation(format!(
            "moving average window {window} must be within 1..={}",
            series.len()
        )));
    }
    Ok(series
        .windows(window)
        .map(|w| {
            let sum: f64 = w.iter().map(|(_, v)| v).sum();
            (w[window - 1].0, sum / window as f64)
        })
        .collect())
}

/// Chart smoothing that keeps every position: the mean of whatever values are
/// present among the trailing `window` entries.
///
/// # Errors
/// Returns `PracticeError::Validation` if `window` is zero.
pub fn rolling_mean(
    series: &[(NaiveDate, Option<f64>)],
    window: usize,
) -> Result<Vec<(NaiveDate, Option<f64>)>, PracticeError> {
    if window < 1 {
        return Err(PracticeError::validation("rolling window must be at least 1"));
    }
    Ok(series
        .iter()
        .enumerate()
        .map(|(i, (date, _))| {
            let from = (i + 1).saturating_sub(window);
            let present: Vec<f64> = series[from..=i].iter().filter_map(|(_, v)| *v).collect();
            let mean = (!present.is_empty())
                .then(|| present.iter().sum::<f64>() / present.len() as f64);
            (*date, mean)
        })
        .collect())
}

/// Unique practice days, ascending.
#[must_use]
pub fn practice_dates(records: &[PracticeRecord]) -> Vec<NaiveDate> {
    records
        .iter()
        .map(Dated::date)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Record count per category, in `Category::ALL` order. Categories without records report 0.
#[must_use]
pub fn category_counts(records: &[PracticeRecord]) -> Vec<(Category, usize)> {
    let mut counts: HashMap<Category, usize, RandomState> = HashMap::default();
    for record in records {
        *counts.entry(record.category()).or_insert(0) += 1;
    }
    Category::ALL
        .into_iter()
        .map(|c| (c, counts.get(&c).copied().unwrap_or(0)))
        .collect()
}

/// Records per calendar day from `start` to `end` inclusive, for the practice heatmap.
#[must_use]
pub fn daily_counts(
    records: &[PracticeRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<(NaiveDate, usize)> {
    let mut by_day: HashMap<NaiveDate, usize, RandomState> = HashMap::default();
    for record in records {
        *by_day.entry(record.date()).or_insert(0) += 1;
    }
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(|d| (d, by_day.get(&d).copied().unwrap_or(0)))
        .collect()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ActivityRow {
    pub date: NaiveDate,
    pub category: Category,
    pub details: String,
}

/// Newest records first; records on the same day keep their stored order.
#[must_use]
pub fn recent_activity(records: &[PracticeRecord], limit: usize) -> Vec<ActivityRow> {
    let mut rows: Vec<ActivityRow> = records
        .iter()
        .map(|r| ActivityRow {
            date: r.date(),
            category: r.category(),
            details: r.summary(),
        })
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows.truncate(limit);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, day).unwrap()
    }

    #[test]
    fn rolling_mean_skips_missing_values() {
        let series = [(d(1), Some(1.0)), (d(2), None), (d(3), Some(3.0)), (d(4), None)];
        let out = rolling_mean(&series, 2).unwrap();
        assert_eq!(out[0].1, Some(1.0));
        assert_eq!(out[1].1, Some(1.0));
        assert_eq!(out[2].1, Some(3.0));
        assert_eq!(out[3].1, Some(3.0));
        assert_eq!(rolling_mean(&[(d(1), None)], 3).unwrap()[0].1, None);
    }
}
