use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PracticeError;
use crate::model::types::Dated;
use crate::scoring::wedge_ladder::{
    LadderGrade, MAX_DISTANCE, MAX_GRADE, MIN_DISTANCE, grade_for, ladder_length,
};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LadderMode {
    #[default]
    InOrder,
    Randomizer,
}

impl fmt::Display for LadderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LadderMode::InOrder => write!(f, "In Order"),
            LadderMode::Randomizer => write!(f, "Randomizer"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WedgeLadderSession {
    pub date: NaiveDate,
    pub mode: LadderMode,
    pub start_distance: u32,
    pub end_distance: u32,
    pub total_shots: u32,
    pub grade: u8,
    pub pct_within_5: f64,
    pub pct_within_4: f64,
    pub pct_within_3: f64,
    pub pct_within_2: f64,
}

impl WedgeLadderSession {
    #[must_use]
    pub fn from_grade(
        date: NaiveDate,
        mode: LadderMode,
        start_distance: u32,
        end_distance: u32,
        grade: &LadderGrade,
    ) -> Self {
        let pct = |yards| grade.band(yards).map_or(0.0, |b| b.pct);
        Self {
            date,
            mode,
            start_distance,
            end_distance,
            total_shots: grade.total_shots,
            grade: grade.grade,
            pct_within_5: pct(5),
            pct_within_4: pct(4),
            pct_within_3: pct(3),
            pct_within_2: pct(2),
        }
    }

    /// # Errors
    /// Returns `PracticeError::Validation` for distances outside the ladder range,
    /// a shot count that does not match the ladder, a percentage outside 0..=100,
    /// or a grade the percentages do not earn.
    pub fn validate(&self) -> Result<(), PracticeError> {
        if self.start_distance < MIN_DISTANCE || self.end_distance > MAX_DISTANCE {
            return Err(PracticeError::validation(format!(
                "ladder distances must be within {MIN_DISTANCE}..={MAX_DISTANCE} yards"
            )));
        }
        if self.start_distance >= self.end_distance {
            return Err(PracticeError::validation(
                "start distance must be less than end distance",
            ));
        }
        let expected_shots = ladder_length(self.start_distance, self.end_distance);
        if self.total_shots != expected_shots {
            return Err(PracticeError::validation(format!(
                "a {}-{} yard ladder has {expected_shots} shots, not {}",
                self.start_distance, self.end_distance, self.total_shots
            )));
        }
        let pcts = [
            self.pct_within_5,
            self.pct_within_4,
            self.pct_within_3,
            self.pct_within_2,
        ];
        if pcts.iter().any(|p| !(0.0..=100.0).contains(p)) {
            return Err(PracticeError::validation(
                "wedge ladder percentages must be within 0..=100",
            ));
        }
        let earned = grade_for(|yards| match yards {
            5 => self.pct_within_5,
            4 => self.pct_within_4,
            3 => self.pct_within_3,
            _ => self.pct_within_2,
        });
        if self.grade != earned {
            return Err(PracticeError::validation(format!(
                "grade {} does not match the percentages, which earn {earned}/{MAX_GRADE}",
                self.grade
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Grade {}/{MAX_GRADE}, {}-{} yds ({}), {}% within 5",
            self.grade, self.start_distance, self.end_distance, self.mode, self.pct_within_5
        )
    }
}

impl Dated for WedgeLadderSession {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
