use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PracticeError;
use crate::model::{Aggregate, HOLE_COUNT, HOLES, HoleStats, LoopRound, TOTAL_PAR};
use crate::stats::rolling_mean;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct HoleAverage {
    pub hole: u8,
    pub par: u32,
    pub average_score: Aggregate,
    pub average_vs_par: Aggregate,
}

/// Per-round ratios for the stats-over-time chart.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RoundStats {
    pub date: NaiveDate,
    pub total_score: u32,
    pub vs_par: i64,
    pub fairway_pct: f64,
    pub gir_pct: f64,
    /// `None` when the round had no up/down chance.
    pub up_down_pct: Option<f64>,
    pub penalties: u32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
    pub rolling: Option<f64>,
}

/// Cross-round aggregates for the three-hole loop. Rounds are held oldest first.
#[derive(Debug, Clone)]
pub struct LoopStats<'a> {
    rounds: Vec<&'a LoopRound>,
}

impl<'a> LoopStats<'a> {
    #[must_use]
    pub fn new(rounds: &'a [LoopRound]) -> Self {
        let mut rounds: Vec<&LoopRound> = rounds.iter().collect();
        rounds.sort_by_key(|r| r.date);
        Self { rounds }
    }

    #[must_use]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    #[must_use]
    pub fn scoring_average(&self) -> Aggregate {
        Aggregate::mean(self.rounds.iter().map(|r| f64::from(r.total_score())))
    }

    #[must_use]
    pub fn scoring_average_vs_par(&self) -> Aggregate {
        self.scoring_average().map(|avg| avg - f64::from(TOTAL_PAR))
    }

    /// Fairways hit over fairway holes played (holes 1 and 3 only).
    #[must_use]
    pub fn fairway_pct(&self) -> Aggregate {
        let (hit, eligible) = self.count_holes(|h| h.fairway_hit.map(u32::from));
        Aggregate::ratio(hit, eligible)
    }

    #[must_use]
    pub fn gir_pct(&self) -> Aggregate {
        let (hit, eligible) = self.count_holes(|h| Some(u32::from(h.gir)));
        Aggregate::ratio(hit, eligible)
    }

    /// Conversions over chances; holes without a chance stay out of the denominator.
    #[must_use]
    pub fn up_down_pct(&self) -> Aggregate {
        let (made, chances) =
            self.count_holes(|h| h.up_down_chance.then(|| u32::from(h.converted())));
        Aggregate::ratio(made, chances)
    }

    #[must_use]
    pub fn total_penalties(&self) -> u32 {
        self.rounds
            .iter()
            .flat_map(|r| r.holes.iter())
            .map(|h| h.penalty)
            .sum()
    }

    #[must_use]
    pub fn penalties_per_round(&self) -> Aggregate {
        if self.rounds.is_empty() {
            return Aggregate::NoData;
        }
        Aggregate::Value(f64::from(self.total_penalties()) / self.rounds.len() as f64)
    }

    #[must_use]
    pub fn rounds_with_penalty(&self) -> usize {
        self.rounds
            .iter()
            .filter(|r| r.holes.iter().any(|h| h.penalty > 0))
            .count()
    }

    #[must_use]
    pub fn per_hole_averages(&self) -> Vec<HoleAverage> {
        (0..HOLE_COUNT)
            .map(|i| {
                let info = HOLES[i];
                let average_score =
                    Aggregate::mean(self.rounds.iter().map(|r| f64::from(r.holes[i].score)));
                HoleAverage {
                    hole: info.number,
                    par: info.par,
                    average_score,
                    average_vs_par: average_score.map(|avg| avg - f64::from(info.par)),
                }
            })
            .collect()
    }

    #[must_use]
    pub fn round_stats(&self) -> Vec<RoundStats> {
        self.rounds.iter().map(|r| stats_for_round(r)).collect()
    }

    /// Total score per round alongside its rolling mean.
    ///
    /// # Errors
    /// Returns `PracticeError::Validation` if `window` is zero.
    pub fn scoring_trend(&self, window: usize) -> Result<Vec<TrendPoint>, PracticeError> {
        let series: Vec<(NaiveDate, Option<f64>)> = self
            .rounds
            .iter()
            .map(|r| (r.date, Some(f64::from(r.total_score()))))
            .collect();
        trend(&series, window)
    }

    /// Rolling fairway, GIR and up/down ratios, in that order.
    ///
    /// # Errors
    /// Returns `PracticeError::Validation` if `window` is zero.
    pub fn stat_trends(&self, window: usize) -> Result<[Vec<TrendPoint>; 3], PracticeError> {
        let stats = self.round_stats();
        let series = |f: fn(&RoundStats) -> Option<f64>| -> Vec<(NaiveDate, Option<f64>)> {
            stats.iter().map(|s| (s.date, f(s))).collect()
        };
        Ok([
            trend(&series(|s| Some(s.fairway_pct)), window)?,
            trend(&series(|s| Some(s.gir_pct)), window)?,
            trend(&series(|s| s.up_down_pct), window)?,
        ])
    }

    /// Sums `(hits, eligible)` over every hole of every round; `f` returns
    /// `None` for holes that do not count toward the stat.
    fn count_holes<F>(&self, f: F) -> (u32, u32)
    where
        F: Fn(&HoleStats) -> Option<u32>,
    {
        self.rounds
            .iter()
            .flat_map(|r| r.holes.iter())
            .filter_map(|h| f(h))
            .fold((0, 0), |(hits, n), hit| (hits + hit, n + 1))
    }
}

fn trend(series: &[(NaiveDate, Option<f64>)], window: usize) -> Result<Vec<TrendPoint>, PracticeError> {
    let rolled = rolling_mean(series, window)?;
    Ok(series
        .iter()
        .zip(rolled)
        .map(|((date, value), (_, rolling))| TrendPoint {
            date: *date,
            value: *value,
            rolling,
        })
        .collect())
}

struct HoleCounts {
    fairways: usize,
    girs: usize,
    chances: usize,
    converted: usize,
    penalties: u32,
}

fn hole_counts(round: &LoopRound) -> HoleCounts {
    let holes = &round.holes;
    HoleCounts {
        fairways: holes.iter().filter(|h| h.fairway_hit == Some(true)).count(),
        girs: holes.iter().filter(|h| h.gir).count(),
        chances: holes.iter().filter(|h| h.up_down_chance).count(),
        converted: holes.iter().filter(|h| h.converted()).count(),
        penalties: holes.iter().map(|h| h.penalty).sum(),
    }
}

fn fairway_holes() -> usize {
    HOLES.iter().filter(|h| h.has_fairway).count()
}

#[must_use]
pub fn stats_for_round(round: &LoopRound) -> RoundStats {
    let c = hole_counts(round);
    RoundStats {
        date: round.date,
        total_score: round.total_score(),
        vs_par: round.vs_par(),
        fairway_pct: c.fairways as f64 / fairway_holes() as f64,
        gir_pct: c.girs as f64 / HOLE_COUNT as f64,
        up_down_pct: (c.chances > 0).then(|| c.converted as f64 / c.chances as f64),
        penalties: c.penalties,
    }
}

/// `FW 1/2 | GIR 2/3 | UD 1/2 | PEN 1`; UD only with a chance, PEN only when non-zero.
#[must_use]
pub fn round_summary(round: &LoopRound) -> String {
    let c = hole_counts(round);
    let mut parts = vec![
        format!("FW {}/{}", c.fairways, fairway_holes()),
        format!("GIR {}/{HOLE_COUNT}", c.girs),
    ];
    if c.chances > 0 {
        parts.push(format!("UD {}/{}", c.converted, c.chances));
    }
    if c.penalties > 0 {
        parts.push(format!("PEN {}", c.penalties));
    }
    parts.join(" | ")
}
