use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::PracticeError;
use crate::model::types::{Category, Dated};
use crate::model::utils::title_case_column;

pub const BALL_STRIKING_DRILLS: &[&str] = &[
    "mechanical_no_results",
    "towel_drill_3x",
    "eyes_close_strike_3x",
    "toe_heel_center_3x",
    "jump_the_ball",
    "wedge_ladder_3x",
    "crazy_shit_1x",
    "one_handed_pitch_3x",
];

pub const PUTTING_DRILLS: &[&str] = &["three_foot_drill", "guess_the_slope", "lag_drill"];

/// Drill columns a session category accepts. `None` means any drill name is allowed.
#[must_use]
pub fn known_drills(category: Category) -> Option<&'static [&'static str]> {
    match category {
        Category::BallStriking => Some(BALL_STRIKING_DRILLS),
        Category::Putting => Some(PUTTING_DRILLS),
        _ => None,
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PracticeSession {
    pub category: Category,
    pub date: NaiveDate,
    #[serde(default)]
    pub drills: BTreeMap<String, u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

impl PracticeSession {
    #[must_use]
    pub fn new(category: Category, date: NaiveDate) -> Self {
        Self {
            category,
            date,
            drills: BTreeMap::new(),
            notes: None,
            duration_minutes: None,
        }
    }

    #[must_use]
    pub fn with_drill(mut self, name: &str, count: u32) -> Self {
        self.drills.insert(name.to_string(), count);
        self
    }

    /// Drills with a non-zero count, sorted by drill name.
    pub fn logged_drills(&self) -> impl Iterator<Item = (&str, u32)> {
        self.drills
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(name, count)| (name.as_str(), *count))
    }

    /// # Errors
    /// Returns `PracticeError::Validation` if the category does not hold sessions,
    /// a drill name is unknown for the category, or no drill was logged.
    pub fn validate(&self) -> Result<(), PracticeError> {
        if !self.category.is_session_category() {
            return Err(PracticeError::validation(format!(
                "category {} does not hold practice sessions",
                self.category
            )));
        }
        if let Some(known) = known_drills(self.category) {
            if let Some(unknown) = self.drills.keys().find(|k| !known.contains(&k.as_str())) {
                return Err(PracticeError::validation(format!(
                    "unknown drill '{unknown}' for {}",
                    self.category
                )));
            }
        }
        if self.logged_drills().next().is_none() {
            return Err(PracticeError::validation(
                "enter at least one drill before submitting",
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn summary(&self) -> String {
        let mut parts: Vec<String> = self
            .logged_drills()
            .map(|(name, count)| format!("{}: {count}", title_case_column(name)))
            .collect();
        if let Some(minutes) = self.duration_minutes {
            parts.push(format!("Duration: {minutes} min"));
        }
        if let Some(notes) = self.notes.as_deref().filter(|n| !n.trim().is_empty()) {
            parts.push(format!("Notes: {}", notes.trim()));
        }
        parts.join(", ")
    }
}

impl Dated for PracticeSession {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
