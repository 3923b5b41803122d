use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::config::ReferenceData;
use crate::error::PracticeError;
use crate::model::{Category, Goals};
use crate::stats::{
    ActivityRow, StreakSummary, category_counts, compute_streaks, daily_counts, practice_dates,
    recent_activity, sessions_this_month, sessions_this_week,
};
use crate::storage::{Storage, load_all};

pub const RECENT_ACTIVITY_LIMIT: usize = 10;

#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub today: NaiveDate,
    pub total_sessions: usize,
    pub streaks: StreakSummary,
    pub this_week: usize,
    pub this_month: usize,
    pub by_category: Vec<(Category, usize)>,
    /// Jan 1 of the current year through `today`.
    pub heatmap: Vec<(NaiveDate, usize)>,
    pub recent: Vec<ActivityRow>,
    pub goals: Option<Goals>,
}

/// Builds the landing page from every stored category.
///
/// # Errors
/// Returns an error if any category fails to load.
pub fn get_data_for_dashboard(
    storage: &dyn Storage,
    reference: &ReferenceData,
    today: NaiveDate,
) -> Result<DashboardData, PracticeError> {
    let records = load_all(storage)?;
    let dates = practice_dates(&records);
    let year_start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);

    Ok(DashboardData {
        today,
        total_sessions: records.len(),
        streaks: compute_streaks(dates, today),
        this_week: sessions_this_week(&records, today),
        this_month: sessions_this_month(&records, today),
        by_category: category_counts(&records),
        heatmap: daily_counts(&records, year_start, today),
        recent: recent_activity(&records, RECENT_ACTIVITY_LIMIT),
        goals: reference.goals.clone(),
    })
}
