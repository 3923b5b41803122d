use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreakSummary {
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Streaks over calendar days with at least one session.
///
/// The current streak is the run ending at the most recent practice day, kept
/// only while that day is `today` or yesterday. Days after `today` never count
/// toward it.
#[must_use]
pub fn compute_streaks<I>(session_dates: I, today: NaiveDate) -> StreakSummary
where
    I: IntoIterator<Item = NaiveDate>,
{
    let dates: Vec<NaiveDate> = session_dates
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if dates.is_empty() {
        return StreakSummary::default();
    }

    let mut longest = 1u32;
    let mut run = 1u32;
    for pair in dates.windows(2) {
        if pair[1] - pair[0] == Duration::days(1) {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 1;
        }
    }

    let past: Vec<NaiveDate> = dates.into_iter().take_while(|d| *d <= today).collect();
    let current = match past.last() {
        Some(last) if today - *last <= Duration::days(1) => {
            let mut current = 1u32;
            for pair in past.windows(2).rev() {
                if pair[1] - pair[0] == Duration::days(1) {
                    current += 1;
                } else {
                    break;
                }
            }
            current
        }
        _ => 0,
    };

    log::debug!("streaks: current {current}, longest {longest}");
    StreakSummary {
        current_streak: current,
        longest_streak: longest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn yesterday_keeps_streak_alive() {
        let s = compute_streaks([day(8), day(9)], day(10));
        assert_eq!(s.current_streak, 2);
        assert_eq!(s.longest_streak, 2);
    }

    #[test]
    fn duplicates_count_once() {
        let s = compute_streaks([day(10), day(10), day(9)], day(10));
        assert_eq!(s, StreakSummary { current_streak: 2, longest_streak: 2 });
    }

    #[test]
    fn future_days_ignored_for_current() {
        let s = compute_streaks([day(9), day(10), day(12)], day(10));
        assert_eq!(s.current_streak, 2);
        assert_eq!(s.longest_streak, 2);
    }
}
