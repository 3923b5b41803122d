use chrono::NaiveDate;
use serde::Serialize;

use crate::error::PracticeError;
use crate::model::{Aggregate, LoopRound};
use crate::scoring::{HoleAverage, LoopStats, RoundStats, TrendPoint, round_summary};
use crate::storage::{Storage, load_loop_rounds};

#[derive(Debug, Serialize)]
pub struct RoundRow {
    pub date: NaiveDate,
    pub total_score: u32,
    pub vs_par: i64,
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct LoopData {
    pub rounds_played: usize,
    pub scoring_average: Aggregate,
    pub scoring_average_vs_par: Aggregate,
    pub fairway_pct: Aggregate,
    pub gir_pct: Aggregate,
    pub up_down_pct: Aggregate,
    pub penalties_per_round: Aggregate,
    pub total_penalties: u32,
    pub rounds_with_penalty: usize,
    pub per_hole: Vec<HoleAverage>,
    pub per_round: Vec<RoundStats>,
    pub scoring_trend: Vec<TrendPoint>,
    /// Fairway, GIR and up/down trends, in that order.
    pub stat_trends: [Vec<TrendPoint>; 3],
    /// Newest first.
    pub history: Vec<RoundRow>,
}

/// # Errors
/// Returns an error if the rounds fail to load or `window` is zero.
pub fn get_data_for_loop(storage: &dyn Storage, window: usize) -> Result<LoopData, PracticeError> {
    let rounds = load_loop_rounds(storage)?;
    build_loop_data(&rounds, window)
}

/// # Errors
/// Returns `PracticeError::Validation` if `window` is zero.
pub fn build_loop_data(rounds: &[LoopRound], window: usize) -> Result<LoopData, PracticeError> {
    let stats = LoopStats::new(rounds);
    let per_round = stats.round_stats();
    let mut history: Vec<RoundRow> = per_round
        .iter()
        .zip(rounds_by_date(rounds))
        .map(|(s, r)| RoundRow {
            date: s.date,
            total_score: s.total_score,
            vs_par: s.vs_par,
            summary: round_summary(r),
        })
        .collect();
    history.reverse();

    let data = LoopData {
        rounds_played: stats.round_count(),
        scoring_average: stats.scoring_average(),
        scoring_average_vs_par: stats.scoring_average_vs_par(),
        fairway_pct: stats.fairway_pct(),
        gir_pct: stats.gir_pct(),
        up_down_pct: stats.up_down_pct(),
        penalties_per_round: stats.penalties_per_round(),
        total_penalties: stats.total_penalties(),
        rounds_with_penalty: stats.rounds_with_penalty(),
        per_hole: stats.per_hole_averages(),
        scoring_trend: stats.scoring_trend(window)?,
        stat_trends: stats.stat_trends(window)?,
        per_round,
        history,
    };
    log::debug!(
        "loop page: {} rounds, average {}",
        data.rounds_played,
        data.scoring_average
    );
    Ok(data)
}

fn rounds_by_date(rounds: &[LoopRound]) -> Vec<&LoopRound> {
    let mut sorted: Vec<&LoopRound> = rounds.iter().collect();
    sorted.sort_by_key(|r| r.date);
    sorted
}
