use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::PracticeError;
use crate::model::types::Dated;

/// The short-game shot types, in scorecard order.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShotType {
    #[serde(rename = "50_yards_f")]
    FiftyYardsF,
    #[serde(rename = "30_yards_f")]
    ThirtyYardsF,
    #[serde(rename = "10_f_chip")]
    TenFChip,
    #[serde(rename = "20_yards_r")]
    TwentyYardsR,
    #[serde(rename = "flop")]
    Flop,
    #[serde(rename = "15_f_pitch")]
    FifteenFPitch,
    #[serde(rename = "8_yard_sand")]
    EightYardSand,
    #[serde(rename = "15_yard_sand")]
    FifteenYardSand,
}

impl ShotType {
    pub const ALL: [ShotType; 8] = [
        ShotType::FiftyYardsF,
        ShotType::ThirtyYardsF,
        ShotType::TenFChip,
        ShotType::TwentyYardsR,
        ShotType::Flop,
        ShotType::FifteenFPitch,
        ShotType::EightYardSand,
        ShotType::FifteenYardSand,
    ];

    /// Name used as the key of the handicap lookup tables.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::FiftyYardsF => "50 Yards F",
            Self::ThirtyYardsF => "30 Yards F",
            Self::TenFChip => "10 F Chip",
            Self::TwentyYardsR => "20 Yards R",
            Self::Flop => "Flop",
            Self::FifteenFPitch => "15 F Pitch",
            Self::EightYardSand => "8 Yard Sand",
            Self::FifteenYardSand => "15 Yard Sand",
        }
    }

    #[must_use]
    pub fn column_key(self) -> &'static str {
        match self {
            Self::FiftyYardsF => "50_yards_f",
            Self::ThirtyYardsF => "30_yards_f",
            Self::TenFChip => "10_f_chip",
            Self::TwentyYardsR => "20_yards_r",
            Self::Flop => "flop",
            Self::FifteenFPitch => "15_f_pitch",
            Self::EightYardSand => "8_yard_sand",
            Self::FifteenYardSand => "15_yard_sand",
        }
    }
}

impl fmt::Display for ShotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Accepts either the display name or the column key.
impl FromStr for ShotType {
    type Err = PracticeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.display_name().eq_ignore_ascii_case(s) || t.column_key() == s)
            .ok_or_else(|| PracticeError::lookup(format!("unknown shot type '{s}'")))
    }
}

/// One short-game test session. A missing or zero score means the shot type was not tested.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TestResult {
    pub date: NaiveDate,
    #[serde(default)]
    pub scores: BTreeMap<ShotType, u32>,
}

impl TestResult {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            scores: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_score(mut self, shot_type: ShotType, score: u32) -> Self {
        self.scores.insert(shot_type, score);
        self
    }

    #[must_use]
    pub fn score(&self, shot_type: ShotType) -> Option<u32> {
        self.scores.get(&shot_type).copied().filter(|s| *s > 0)
    }

    /// # Errors
    /// Returns `PracticeError::Validation` when no shot type has a score.
    pub fn validate(&self) -> Result<(), PracticeError> {
        if ShotType::ALL.iter().all(|t| self.score(*t).is_none()) {
            return Err(PracticeError::validation(
                "enter a score for at least one shot type",
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn summary(&self) -> String {
        ShotType::ALL
            .iter()
            .filter_map(|t| self.score(*t).map(|s| format!("{t}: {s}")))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Dated for TestResult {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
