use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PracticeError;
use crate::model::{Aggregate, LadderMode, WedgeLadderSession};

pub const MAX_GRADE: u8 = 5;
pub const MIN_DISTANCE: u32 = 10;
pub const MAX_DISTANCE: u32 = 200;
pub const DISTANCE_STEP: usize = 5;

/// Accuracy bands in yards, widest first.
pub const BANDS: [u32; 4] = [5, 4, 3, 2];

/// `(band yards, percent needed)` for grades 1 to 5.
const GRADE_SCALE: [(u32, f64); 5] = [(5, 50.0), (5, 70.0), (4, 70.0), (3, 70.0), (2, 70.0)];

/// Target distances for a ladder from `start` to `end` yards.
///
/// # Errors
/// Returns `PracticeError::Validation` unless `10 <= start < end <= 200`.
pub fn ladder_distances(start: u32, end: u32, mode: LadderMode) -> Result<Vec<u32>, PracticeError> {
    if start < MIN_DISTANCE || end > MAX_DISTANCE {
        return Err(PracticeError::validation(format!(
            "ladder distances must be within {MIN_DISTANCE}..={MAX_DISTANCE} yards"
        )));
    }
    if start >= end {
        return Err(PracticeError::validation(
            "start distance must be less than end distance",
        ));
    }
    let mut targets: Vec<u32> = (start..=end).step_by(DISTANCE_STEP).collect();
    if mode == LadderMode::Randomizer {
        targets.shuffle(&mut rand::thread_rng());
    }
    Ok(targets)
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub yards: u32,
    pub within: u32,
    pub total: u32,
    /// Percent of shots inside the band, one decimal.
    pub pct: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LadderGrade {
    pub grade: u8,
    pub total_shots: u32,
    pub bands: Vec<Band>,
}

impl LadderGrade {
    #[must_use]
    pub fn band(&self, yards: u32) -> Option<&Band> {
        self.bands.iter().find(|b| b.yards == yards)
    }
}

/// Number of targets on a ladder from `start` to `end` yards.
#[must_use]
pub fn ladder_length(start: u32, end: u32) -> u32 {
    end.saturating_sub(start) / DISTANCE_STEP as u32 + 1
}

/// Highest grade whose band percentage is met; `pct_within` maps band yards to percent.
#[must_use]
pub fn grade_for(pct_within: impl Fn(u32) -> f64) -> u8 {
    let mut grade = 0;
    for (level, (yards, needed)) in (1..=MAX_GRADE).zip(GRADE_SCALE) {
        if pct_within(yards) >= needed {
            grade = level;
        }
    }
    grade
}

/// Grades a ladder from paired target and actual yardages.
///
/// # Errors
/// Returns `PracticeError::Validation` when the lists differ in length, are
/// empty, or every actual distance is zero.
pub fn calculate_grade(targets: &[u32], actuals: &[u32]) -> Result<LadderGrade, PracticeError> {
    if targets.len() != actuals.len() {
        return Err(PracticeError::validation(format!(
            "{} targets but {} actual distances",
            targets.len(),
            actuals.len()
        )));
    }
    if actuals.iter().all(|&a| a == 0) {
        return Err(PracticeError::validation(
            "enter at least one actual distance before submitting",
        ));
    }
    let total = targets.len() as u32;
    let misses: Vec<u32> = targets
        .iter()
        .zip(actuals)
        .map(|(t, a)| t.abs_diff(*a))
        .collect();
    let bands: Vec<Band> = BANDS
        .iter()
        .map(|&yards| {
            let within = misses.iter().filter(|&&m| m <= yards).count() as u32;
            let pct = (f64::from(within) / f64::from(total) * 1000.0).round() / 10.0;
            Band {
                yards,
                within,
                total,
                pct,
            }
        })
        .collect();

    let grade = grade_for(|yards| {
        bands
            .iter()
            .find(|b| b.yards == yards)
            .map_or(0.0, |b| b.pct)
    });
    log::debug!("wedge ladder graded {grade}/{MAX_GRADE} over {total} shots");
    Ok(LadderGrade {
        grade,
        total_shots: total,
        bands,
    })
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShotDirection {
    Short,
    Long,
    Perfect,
}

impl fmt::Display for ShotDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotDirection::Short => write!(f, "short"),
            ShotDirection::Long => write!(f, "long"),
            ShotDirection::Perfect => write!(f, "perfect"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShotResult {
    pub shot: usize,
    pub target: u32,
    pub actual: u32,
    pub diff: i64,
    pub direction: ShotDirection,
    pub within_five: bool,
}

#[must_use]
pub fn shot_results(targets: &[u32], actuals: &[u32]) -> Vec<ShotResult> {
    targets
        .iter()
        .zip(actuals)
        .enumerate()
        .map(|(i, (&target, &actual))| {
            let diff = i64::from(actual) - i64::from(target);
            let direction = match diff.signum() {
                -1 => ShotDirection::Short,
                1 => ShotDirection::Long,
                _ => ShotDirection::Perfect,
            };
            ShotResult {
                shot: i + 1,
                target,
                actual,
                diff,
                direction,
                within_five: diff.abs() <= 5,
            }
        })
        .collect()
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct LadderSummary {
    pub sessions: usize,
    pub best_grade: Option<u8>,
    pub average_grade: Aggregate,
}

#[must_use]
pub fn ladder_summary(sessions: &[WedgeLadderSession]) -> LadderSummary {
    LadderSummary {
        sessions: sessions.len(),
        best_grade: sessions.iter().map(|s| s.grade).max(),
        average_grade: Aggregate::mean(sessions.iter().map(|s| f64::from(s.grade))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances_step_by_five() {
        let d = ladder_distances(40, 60, LadderMode::InOrder).unwrap();
        assert_eq!(d, vec![40, 45, 50, 55, 60]);
        assert!(ladder_distances(60, 60, LadderMode::InOrder).is_err());
        assert!(ladder_distances(5, 60, LadderMode::InOrder).is_err());
        let mut shuffled = ladder_distances(40, 60, LadderMode::Randomizer).unwrap();
        shuffled.sort_unstable();
        assert_eq!(shuffled, d);
    }

    #[test]
    fn grade_thresholds() {
        let targets = [50, 55, 60, 65];
        // two of four within 5 yards
        assert_eq!(calculate_grade(&targets, &[50, 55, 70, 75]).unwrap().grade, 1);
        // three of four within 5, none closer than 4
        assert_eq!(calculate_grade(&targets, &[55, 60, 65, 80]).unwrap().grade, 2);
        // all within 2
        assert_eq!(calculate_grade(&targets, &[51, 57, 60, 64]).unwrap().grade, 5);
        assert_eq!(calculate_grade(&targets, &[10, 10, 10, 10]).unwrap().grade, 0);
    }

    #[test]
    fn all_zero_actuals_rejected() {
        assert!(calculate_grade(&[40, 45], &[0, 0]).is_err());
    }

    #[test]
    fn shot_rows_sign_the_difference() {
        let rows = shot_results(&[40, 45, 50], &[38, 45, 57]);
        assert_eq!(rows[0].diff, -2);
        assert_eq!(rows[0].direction, ShotDirection::Short);
        assert_eq!(rows[1].direction, ShotDirection::Perfect);
        assert_eq!(rows[2].direction, ShotDirection::Long);
        assert!(!rows[2].within_five);
    }
}
