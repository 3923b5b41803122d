mod common;

use chrono::Duration;
use golf_practice::error::PracticeError;
use golf_practice::model::{Category, PracticeRecord, PracticeSession};
use golf_practice::stats::{
    StreakSummary, category_counts, compute_streaks, daily_counts, moving_average,
    practice_dates, recent_activity, sessions_this_month, sessions_this_week,
};

use common::date;

fn session(category: Category, day: chrono::NaiveDate, drill: &str) -> PracticeRecord {
    PracticeRecord::Session(PracticeSession::new(category, day).with_drill(drill, 1))
}

#[test]
fn test_three_consecutive_days() {
    let d = date(2026, 10, 19);
    let s = compute_streaks([d, d - Duration::days(1), d - Duration::days(2)], d);
    assert_eq!(
        s,
        StreakSummary {
            current_streak: 3,
            longest_streak: 3
        }
    );
}

#[test]
fn test_gap_breaks_the_run() {
    let d = date(2026, 10, 19);
    let dates = [d, d - Duration::days(2)];

    let today = compute_streaks(dates, d);
    assert_eq!(today.longest_streak, 1);
    assert_eq!(today.current_streak, 1);

    let later = compute_streaks(dates, d + Duration::days(2));
    assert_eq!(later.longest_streak, 1);
    assert_eq!(later.current_streak, 0);
}

#[test]
fn test_no_dates_no_streak() {
    let s = compute_streaks(Vec::new(), date(2026, 10, 19));
    assert_eq!(s, StreakSummary::default());
}

#[test]
fn test_moving_average() {
    let series: Vec<_> = (1..=4).map(|i| (date(2026, 10, i), f64::from(i))).collect();
    let avg = moving_average(&series, 2).unwrap();
    let values: Vec<f64> = avg.iter().map(|(_, v)| *v).collect();
    assert_eq!(values, vec![1.5, 2.5, 3.5]);
    assert_eq!(avg[0].0, date(2026, 10, 2));

    assert!(matches!(moving_average(&series, 0), Err(PracticeError::Validation(_))));
    assert!(matches!(moving_average(&series, 5), Err(PracticeError::Validation(_))));
}

#[test]
fn test_week_and_month_counts() {
    // 2026-10-19 is a Monday
    let today = date(2026, 10, 21);
    let records = vec![
        session(Category::Putting, date(2026, 10, 18), "lag_drill"),
        session(Category::Putting, date(2026, 10, 19), "lag_drill"),
        session(Category::BallStriking, date(2026, 10, 21), "towel_drill_3x"),
        session(Category::ShortGame, date(2026, 9, 30), "bump_and_run"),
    ];
    assert_eq!(sessions_this_week(&records, today), 2);
    assert_eq!(sessions_this_month(&records, today), 3);
}

#[test]
fn test_dates_counts_and_recent_activity() {
    let records = vec![
        session(Category::Putting, date(2026, 10, 1), "lag_drill"),
        session(Category::BallStriking, date(2026, 10, 3), "jump_the_ball"),
        session(Category::Putting, date(2026, 10, 3), "three_foot_drill"),
    ];

    assert_eq!(practice_dates(&records), vec![date(2026, 10, 1), date(2026, 10, 3)]);

    let counts = category_counts(&records);
    assert_eq!(counts.len(), Category::ALL.len());
    assert_eq!(counts[0], (Category::BallStriking, 1));
    assert_eq!(counts[1], (Category::Putting, 2));
    assert_eq!(counts[3], (Category::Testing, 0));

    let days = daily_counts(&records, date(2026, 10, 1), date(2026, 10, 4));
    let per_day: Vec<usize> = days.iter().map(|(_, n)| *n).collect();
    assert_eq!(per_day, vec![1, 0, 2, 0]);

    let recent = recent_activity(&records, 2);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].category, Category::BallStriking);
    assert_eq!(recent[1].category, Category::Putting);
    assert_eq!(recent[1].date, date(2026, 10, 3));
    assert!(recent[0].details.contains("Jump The Ball: 1"));
}
