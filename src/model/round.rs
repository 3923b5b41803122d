use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PracticeError;
use crate::model::types::Dated;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoleInfo {
    pub number: u8,
    pub par: u32,
    pub has_fairway: bool,
}

pub const HOLE_COUNT: usize = 3;

pub const HOLES: [HoleInfo; HOLE_COUNT] = [
    HoleInfo {
        number: 1,
        par: 5,
        has_fairway: true,
    },
    HoleInfo {
        number: 2,
        par: 3,
        has_fairway: false,
    },
    HoleInfo {
        number: 3,
        par: 4,
        has_fairway: true,
    },
];

pub const TOTAL_PAR: u32 = 12;

pub const MAX_HOLE_SCORE: u32 = 15;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoleStats {
    pub score: u32,
    /// `None` on holes without a fairway (hole 2).
    #[serde(default)]
    pub fairway_hit: Option<bool>,
    pub gir: bool,
    pub up_down_chance: bool,
    pub up_down_converted: bool,
    #[serde(default)]
    pub penalty: u32,
}

impl HoleStats {
    #[must_use]
    pub fn par_for(hole: HoleInfo) -> Self {
        Self {
            score: hole.par,
            fairway_hit: hole.has_fairway.then_some(false),
            gir: false,
            up_down_chance: false,
            up_down_converted: false,
            penalty: 0,
        }
    }

    /// Conversions only count where there was a chance.
    #[must_use]
    pub fn converted(&self) -> bool {
        self.up_down_chance && self.up_down_converted
    }
}

/// A round on the backyard three-hole loop.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LoopRound {
    pub date: NaiveDate,
    pub holes: [HoleStats; HOLE_COUNT],
}

impl LoopRound {
    /// # Errors
    /// Returns `PracticeError::Validation` when the hole stats break a loop invariant.
    pub fn new(date: NaiveDate, holes: [HoleStats; HOLE_COUNT]) -> Result<Self, PracticeError> {
        let round = Self { date, holes };
        round.validate()?;
        Ok(round)
    }

    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.holes.iter().map(|h| h.score).sum()
    }

    #[must_use]
    pub fn vs_par(&self) -> i64 {
        i64::from(self.total_score()) - i64::from(TOTAL_PAR)
    }

    /// Holes paired with their fixed course info.
    pub fn holes_with_info(&self) -> impl Iterator<Item = (HoleInfo, &HoleStats)> {
        HOLES.into_iter().zip(self.holes.iter())
    }

    /// # Errors
    /// Returns `PracticeError::Validation` for out-of-range scores, a fairway
    /// value on a hole without a fairway (or a missing one where there is), or a
    /// conversion recorded without a chance.
    pub fn validate(&self) -> Result<(), PracticeError> {
        for (info, hole) in self.holes_with_info() {
            let n = info.number;
            if hole.score == 0 || hole.score > MAX_HOLE_SCORE {
                return Err(PracticeError::validation(format!(
                    "hole {n}: score {} outside 1..={MAX_HOLE_SCORE}",
                    hole.score
                )));
            }
            if info.has_fairway != hole.fairway_hit.is_some() {
                return Err(PracticeError::validation(if info.has_fairway {
                    format!("hole {n}: fairway result is required")
                } else {
                    format!("hole {n}: has no fairway")
                }));
            }
            if hole.up_down_converted && !hole.up_down_chance {
                return Err(PracticeError::validation(format!(
                    "hole {n}: up/down converted without a chance"
                )));
            }
        }
        Ok(())
    }
}

impl Dated for LoopRound {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
