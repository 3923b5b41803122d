use chrono::NaiveDate;
use serde::Serialize;

use crate::error::PracticeError;
use crate::model::WedgeLadderSession;
use crate::scoring::{LadderSummary, ladder_summary};
use crate::stats::rolling_mean;
use crate::storage::{Storage, load_wedge_ladders};

#[derive(Debug, Serialize)]
pub struct WedgeData {
    pub summary: LadderSummary,
    pub grades: Vec<(NaiveDate, Option<f64>)>,
    pub rolling: Vec<(NaiveDate, Option<f64>)>,
    /// Newest first.
    pub sessions: Vec<WedgeLadderSession>,
}

/// # Errors
/// Returns an error if the ladder sessions fail to load or `window` is zero.
pub fn get_data_for_wedge_ladder(
    storage: &dyn Storage,
    window: usize,
) -> Result<WedgeData, PracticeError> {
    let mut sessions = load_wedge_ladders(storage)?;
    sessions.sort_by_key(|s| s.date);
    let grades: Vec<(NaiveDate, Option<f64>)> = sessions
        .iter()
        .map(|s| (s.date, Some(f64::from(s.grade))))
        .collect();
    let rolling = rolling_mean(&grades, window)?;
    let summary = ladder_summary(&sessions);
    sessions.reverse();
    Ok(WedgeData {
        summary,
        grades,
        rolling,
        sessions,
    })
}
