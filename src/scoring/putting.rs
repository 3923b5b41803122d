use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::PracticeError;
use crate::model::{Aggregate, PuttingTest, PuttingTestKind, PuttingTestSession};

pub const LAG_DISTANCES: [u32; 3] = [30, 40, 50];
pub const LAG_PUTTS_PER_CELL: u32 = 5;
pub const LAG_MAX_SCORE: u32 = 30;

pub const SWEDISH_DISTANCES_FT: [u32; 6] = [22, 12, 18, 10, 14, 8];
pub const SWEDISH_PUTT_COUNT: usize = 18;

pub const LUKE_DONALD_DISTANCES: [u32; 5] = [4, 5, 6, 7, 8];
pub const LUKE_DONALD_HOLES: [u32; 4] = [1, 2, 3, 4];
pub const LUKE_DONALD_GOAL: u32 = 15;
pub const LUKE_DONALD_MAX_SCORE: u32 = 20;

/// Total score to putting handicap breakpoints.
const SWEDISH_HANDICAP_CURVE: [(f64, f64); 4] = [(0.2, -2.0), (2.0, 0.0), (6.3, 5.0), (10.7, 10.0)];

pub const SWEDISH_BENCHMARKS: [(f64, &str); 7] = [
    (-5.5, "Tour Player"),
    (-2.9, "European Tour"),
    (-1.5, "Challenge Tour"),
    (0.2, "+2 HCP"),
    (2.0, "Scratch"),
    (6.3, "5 HCP"),
    (10.7, "10 HCP"),
];

/// Score for one Swedish drill putt, by metres left from the hole.
///
/// # Errors
/// Returns `PracticeError::Validation` for a negative or non-finite distance.
pub fn swedish_putt_score(metres_from_hole: f64) -> Result<i32, PracticeError> {
    if !metres_from_hole.is_finite() || metres_from_hole < 0.0 {
        return Err(PracticeError::validation(format!(
            "putt distance {metres_from_hole} must be a non-negative number of metres"
        )));
    }
    let score = if metres_from_hole == 0.0 {
        -2
    } else if metres_from_hole <= 0.5 {
        -1
    } else if metres_from_hole <= 1.0 {
        0
    } else if metres_from_hole <= 2.0 {
        1
    } else if metres_from_hole <= 3.0 {
        2
    } else {
        3
    };
    Ok(score)
}

/// # Errors
/// Returns `PracticeError::Validation` if any distance is negative.
pub fn swedish_total(putts_m: &[f64]) -> Result<i32, PracticeError> {
    putts_m.iter().map(|&m| swedish_putt_score(m)).sum()
}

#[must_use]
pub fn swedish_score_label(score: i32) -> String {
    match score {
        -2 => "Eagle".to_string(),
        -1 => "Birdie".to_string(),
        0 => "Par".to_string(),
        1 => "Bogey".to_string(),
        2 => "Double".to_string(),
        3 => "Triple".to_string(),
        other => other.to_string(),
    }
}

/// Piecewise-linear putting handicap for a total score, flat beyond the curve ends.
#[must_use]
pub fn swedish_putting_handicap(total_score: f64) -> f64 {
    let (first_x, first_y) = SWEDISH_HANDICAP_CURVE[0];
    let (last_x, last_y) = SWEDISH_HANDICAP_CURVE[SWEDISH_HANDICAP_CURVE.len() - 1];
    if total_score <= first_x {
        return first_y;
    }
    if total_score >= last_x {
        return last_y;
    }
    SWEDISH_HANDICAP_CURVE
        .windows(2)
        .find(|w| total_score <= w[1].0)
        .map_or(last_y, |w| {
            let ((x0, y0), (x1, y1)) = (w[0], w[1]);
            y0 + (total_score - x0) * (y1 - y0) / (x1 - x0)
        })
}

/// Handicap as stored on a Swedish drill record, one decimal.
#[must_use]
pub fn swedish_recorded_handicap(total_score: i32) -> f64 {
    (swedish_putting_handicap(f64::from(total_score)) * 10.0).round() / 10.0
}

/// Closest benchmark label; ties go to the better level.
#[must_use]
pub fn swedish_level_label(total_score: f64) -> &'static str {
    let mut best = SWEDISH_BENCHMARKS[0];
    for bench in &SWEDISH_BENCHMARKS[1..] {
        if (bench.0 - total_score).abs() < (best.0 - total_score).abs() {
            best = *bench;
        }
    }
    best.1
}

/// The 18 putt distances in feet, each drill distance three times, shuffled.
#[must_use]
pub fn swedish_putt_order() -> Vec<u32> {
    let mut order: Vec<u32> = SWEDISH_DISTANCES_FT
        .iter()
        .copied()
        .cycle()
        .take(SWEDISH_PUTT_COUNT)
        .collect();
    order.shuffle(&mut rand::thread_rng());
    order
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct DistanceMakes {
    pub distance_ft: u32,
    pub made: u32,
    pub attempts: u32,
    pub pct: Aggregate,
}

/// Make rate at each Luke Donald distance across every logged session.
#[must_use]
pub fn luke_donald_make_pct(sessions: &[PuttingTestSession]) -> Vec<DistanceMakes> {
    let mut tally: BTreeMap<u32, (u32, u32)> = LUKE_DONALD_DISTANCES
        .iter()
        .map(|&d| (d, (0, 0)))
        .collect();
    for session in sessions {
        if let PuttingTest::LukeDonald { putts } = &session.test {
            for putt in putts {
                let entry = tally.entry(putt.distance_ft).or_insert((0, 0));
                entry.0 += u32::from(putt.made);
                entry.1 += 1;
            }
        }
    }
    tally
        .into_iter()
        .map(|(distance_ft, (made, attempts))| DistanceMakes {
            distance_ft,
            made,
            attempts,
            pct: Aggregate::ratio(made, attempts),
        })
        .collect()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PuttingSummary {
    pub kind: PuttingTestKind,
    pub sessions: usize,
    /// Highest score for lag and Luke Donald, lowest for Swedish.
    pub best: Option<i32>,
    pub average: Aggregate,
    /// Swedish only: handicap of the most recent session.
    pub latest_handicap: Option<f64>,
    /// Luke Donald only: sessions at or above the goal.
    pub goal_hits: Option<usize>,
}

/// Summary for one test kind; sessions of other kinds are ignored. `sessions`
/// must be in stored order so the latest handicap is the last one logged.
#[must_use]
pub fn putting_summary(sessions: &[PuttingTestSession], kind: PuttingTestKind) -> PuttingSummary {
    let of_kind: Vec<&PuttingTestSession> = sessions.iter().filter(|s| s.kind() == kind).collect();
    let scores: Vec<i32> = of_kind.iter().map(|s| s.score()).collect();
    let best = match kind {
        PuttingTestKind::Swedish => scores.iter().min().copied(),
        PuttingTestKind::Lag | PuttingTestKind::LukeDonald => scores.iter().max().copied(),
    };
    let latest_handicap = match kind {
        PuttingTestKind::Swedish => of_kind.iter().rev().find_map(|s| match s.test {
            PuttingTest::Swedish { putting_hcp, .. } => Some(putting_hcp),
            _ => None,
        }),
        _ => None,
    };
    let goal_hits = (kind == PuttingTestKind::LukeDonald).then(|| {
        scores
            .iter()
            .filter(|&&s| s >= LUKE_DONALD_GOAL as i32)
            .count()
    });
    let summary = PuttingSummary {
        kind,
        sessions: of_kind.len(),
        best,
        average: Aggregate::mean(scores.iter().map(|&s| f64::from(s))),
        latest_handicap,
        goal_hits,
    };
    log::debug!("{} summary over {} sessions", kind.label(), summary.sessions);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn putt_score_boundaries() {
        assert_eq!(swedish_putt_score(0.0).unwrap(), -2);
        assert_eq!(swedish_putt_score(0.5).unwrap(), -1);
        assert_eq!(swedish_putt_score(0.51).unwrap(), 0);
        assert_eq!(swedish_putt_score(1.0).unwrap(), 0);
        assert_eq!(swedish_putt_score(2.0).unwrap(), 1);
        assert_eq!(swedish_putt_score(3.0).unwrap(), 2);
        assert_eq!(swedish_putt_score(3.01).unwrap(), 3);
        assert!(swedish_putt_score(-0.1).is_err());
    }

    #[test]
    fn handicap_interpolates_and_clamps() {
        assert_eq!(swedish_putting_handicap(-10.0), -2.0);
        assert_eq!(swedish_putting_handicap(2.0), 0.0);
        assert!((swedish_putting_handicap(1.1) - (-1.0)).abs() < 1e-9);
        assert_eq!(swedish_putting_handicap(40.0), 10.0);
    }

    #[test]
    fn level_label_picks_closest() {
        assert_eq!(swedish_level_label(-6.0), "Tour Player");
        assert_eq!(swedish_level_label(2.4), "Scratch");
        assert_eq!(swedish_level_label(30.0), "10 HCP");
    }

    #[test]
    fn putt_order_uses_each_distance_three_times() {
        let mut order = swedish_putt_order();
        assert_eq!(order.len(), SWEDISH_PUTT_COUNT);
        order.sort_unstable();
        for d in SWEDISH_DISTANCES_FT {
            assert_eq!(order.iter().filter(|&&x| x == d).count(), 3);
        }
    }
}
