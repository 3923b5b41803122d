use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PracticeError;
use crate::model::types::Dated;
use crate::scoring::putting::{
    LAG_DISTANCES, LAG_PUTTS_PER_CELL, LUKE_DONALD_DISTANCES, LUKE_DONALD_HOLES,
    SWEDISH_PUTT_COUNT, swedish_recorded_handicap, swedish_total,
};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Slope {
    Uphill,
    Downhill,
}

impl fmt::Display for Slope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slope::Uphill => write!(f, "Uphill"),
            Slope::Downhill => write!(f, "Downhill"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LagCell {
    pub distance_ft: u32,
    pub slope: Slope,
    /// Putts finishing in the box, out of five.
    pub in_box: u32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LukeDonaldPutt {
    pub hole: u32,
    pub distance_ft: u32,
    pub made: bool,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum PuttingTestKind {
    Lag,
    Swedish,
    LukeDonald,
}

impl PuttingTestKind {
    pub const ALL: [PuttingTestKind; 3] = [
        PuttingTestKind::Lag,
        PuttingTestKind::Swedish,
        PuttingTestKind::LukeDonald,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Lag => "Lag Drill",
            Self::Swedish => "Swedish Drill",
            Self::LukeDonald => "Luke Donald Drill",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "test_type", rename_all = "snake_case")]
pub enum PuttingTest {
    Lag {
        cells: Vec<LagCell>,
    },
    Swedish {
        /// Metres from the hole for each putt; may be empty for imported history.
        #[serde(default)]
        putts_m: Vec<f64>,
        total_score: i32,
        putting_hcp: f64,
    },
    LukeDonald {
        putts: Vec<LukeDonaldPutt>,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PuttingTestSession {
    pub date: NaiveDate,
    pub test: PuttingTest,
}

impl PuttingTestSession {
    /// Scores a Swedish drill from the metres-from-hole of each putt.
    ///
    /// # Errors
    /// Returns `PracticeError::Validation` for a negative distance or a wrong putt count.
    pub fn swedish(date: NaiveDate, putts_m: Vec<f64>) -> Result<Self, PracticeError> {
        if putts_m.len() != SWEDISH_PUTT_COUNT {
            return Err(PracticeError::validation(format!(
                "swedish drill needs {SWEDISH_PUTT_COUNT} putts, got {}",
                putts_m.len()
            )));
        }
        let total_score = swedish_total(&putts_m)?;
        let putting_hcp = swedish_recorded_handicap(total_score);
        Ok(Self {
            date,
            test: PuttingTest::Swedish {
                putts_m,
                total_score,
                putting_hcp,
            },
        })
    }

    #[must_use]
    pub fn kind(&self) -> PuttingTestKind {
        match self.test {
            PuttingTest::Lag { .. } => PuttingTestKind::Lag,
            PuttingTest::Swedish { .. } => PuttingTestKind::Swedish,
            PuttingTest::LukeDonald { .. } => PuttingTestKind::LukeDonald,
        }
    }

    /// Headline score: putts in the box (lag), total strokes (Swedish) or makes (Luke Donald).
    #[must_use]
    pub fn score(&self) -> i32 {
        match &self.test {
            PuttingTest::Lag { cells } => cells.iter().map(|c| c.in_box as i32).sum(),
            PuttingTest::Swedish { total_score, .. } => *total_score,
            PuttingTest::LukeDonald { putts } => putts.iter().filter(|p| p.made).count() as i32,
        }
    }

    /// # Errors
    /// Returns `PracticeError::Validation` when cells fall outside the drill layout,
    /// counts exceed their maximum, a lag drill has no putts in the box, or a
    /// Swedish handicap does not follow from its total.
    pub fn validate(&self) -> Result<(), PracticeError> {
        match &self.test {
            PuttingTest::Lag { cells } => {
                for (i, cell) in cells.iter().enumerate() {
                    if !LAG_DISTANCES.contains(&cell.distance_ft) {
                        return Err(PracticeError::validation(format!(
                            "lag drill: {}ft is not a drill distance",
                            cell.distance_ft
                        )));
                    }
                    if cell.in_box > LAG_PUTTS_PER_CELL {
                        return Err(PracticeError::validation(format!(
                            "lag drill: {}ft {} has {} of {LAG_PUTTS_PER_CELL} putts",
                            cell.distance_ft, cell.slope, cell.in_box
                        )));
                    }
                    if cells[..i]
                        .iter()
                        .any(|c| c.distance_ft == cell.distance_ft && c.slope == cell.slope)
                    {
                        return Err(PracticeError::validation(format!(
                            "lag drill: {}ft {} entered twice",
                            cell.distance_ft, cell.slope
                        )));
                    }
                }
                if self.score() == 0 {
                    return Err(PracticeError::validation(
                        "enter at least one lag drill score before submitting",
                    ));
                }
            }
            PuttingTest::Swedish {
                putts_m,
                total_score,
                putting_hcp,
            } => {
                let expected = swedish_recorded_handicap(*total_score);
                if (putting_hcp - expected).abs() > 1e-9 {
                    return Err(PracticeError::validation(format!(
                        "swedish drill: total {total_score:+} means HCP {expected:+.1}, not {putting_hcp:+.1}"
                    )));
                }
                if !putts_m.is_empty() {
                    let recomputed = swedish_total(putts_m)?;
                    if putts_m.len() != SWEDISH_PUTT_COUNT || recomputed != *total_score {
                        return Err(PracticeError::validation(
                            "swedish drill: putts do not add up to the recorded total",
                        ));
                    }
                }
            }
            PuttingTest::LukeDonald { putts } => {
                for (i, putt) in putts.iter().enumerate() {
                    if !LUKE_DONALD_HOLES.contains(&putt.hole)
                        || !LUKE_DONALD_DISTANCES.contains(&putt.distance_ft)
                    {
                        return Err(PracticeError::validation(format!(
                            "luke donald drill: hole {} at {}ft is not part of the drill",
                            putt.hole, putt.distance_ft
                        )));
                    }
                    if putts[..i]
                        .iter()
                        .any(|p| p.hole == putt.hole && p.distance_ft == putt.distance_ft)
                    {
                        return Err(PracticeError::validation(format!(
                            "luke donald drill: hole {} at {}ft entered twice",
                            putt.hole, putt.distance_ft
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn summary(&self) -> String {
        match &self.test {
            PuttingTest::Lag { .. } => format!("Lag Drill: {}/30", self.score()),
            PuttingTest::Swedish {
                total_score,
                putting_hcp,
                ..
            } => format!("Swedish Drill: {total_score:+}, HCP {putting_hcp:+.1}"),
            PuttingTest::LukeDonald { .. } => format!("Luke Donald Drill: {}/20", self.score()),
        }
    }
}

impl Dated for PuttingTestSession {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
