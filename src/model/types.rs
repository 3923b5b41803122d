use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PracticeError;
use crate::model::putting::PuttingTestSession;
use crate::model::round::LoopRound;
use crate::model::session::PracticeSession;
use crate::model::testing::TestResult;
use crate::model::wedge::WedgeLadderSession;

/// Record collections, one per worksheet of the original logbook.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    BallStriking,
    Putting,
    ShortGame,
    Testing,
    ThreeHoleLoop,
    PuttingTesting,
    WedgeLadder,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::BallStriking,
        Category::Putting,
        Category::ShortGame,
        Category::Testing,
        Category::ThreeHoleLoop,
        Category::PuttingTesting,
        Category::WedgeLadder,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BallStriking => "ball_striking",
            Self::Putting => "putting",
            Self::ShortGame => "short_game",
            Self::Testing => "testing",
            Self::ThreeHoleLoop => "three_hole_loop",
            Self::PuttingTesting => "putting_testing",
            Self::WedgeLadder => "wedge_ladder",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::BallStriking => "Ball Striking",
            Self::Putting => "Putting",
            Self::ShortGame => "Short Game",
            Self::Testing => "Short Game Testing",
            Self::ThreeHoleLoop => "3-Hole Loop",
            Self::PuttingTesting => "Putting Testing",
            Self::WedgeLadder => "Wedge Ladder",
        }
    }

    /// Categories that hold plain drill-count practice sessions.
    #[must_use]
    pub fn is_session_category(self) -> bool {
        matches!(self, Self::BallStriking | Self::Putting | Self::ShortGame)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = PracticeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| PracticeError::validation(format!("unknown category '{s}'")))
    }
}

/// Result of an aggregate query. Zero records yield `NoData`, never a numeric zero.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum Aggregate {
    NoData,
    Value(f64),
}

impl Aggregate {
    #[must_use]
    pub fn ratio(numerator: u32, denominator: u32) -> Self {
        if denominator == 0 {
            Self::NoData
        } else {
            Self::Value(f64::from(numerator) / f64::from(denominator))
        }
    }

    #[must_use]
    pub fn mean<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let (sum, count) = values
            .into_iter()
            .fold((0.0, 0u32), |(sum, count), v| (sum + v, count + 1));
        if count == 0 {
            Self::NoData
        } else {
            Self::Value(sum / f64::from(count))
        }
    }

    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::NoData => None,
            Self::Value(v) => Some(v),
        }
    }

    #[must_use]
    pub fn is_no_data(self) -> bool {
        matches!(self, Self::NoData)
    }

    #[must_use]
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Self::NoData => Self::NoData,
            Self::Value(v) => Self::Value(f(v)),
        }
    }

    /// For callers that cannot proceed without a value.
    ///
    /// # Errors
    /// Returns `PracticeError::NoData` naming `what` when there was nothing to aggregate.
    pub fn require(self, what: &str) -> Result<f64, PracticeError> {
        self.value()
            .ok_or_else(|| PracticeError::NoData(format!("{what} needs at least one record")))
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoData => write!(f, "—"),
            Self::Value(v) => match f.precision() {
                Some(p) => write!(f, "{v:.p$}"),
                None => write!(f, "{v}"),
            },
        }
    }
}

pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// Any record the store can hold.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PracticeRecord {
    Session(PracticeSession),
    Test(TestResult),
    LoopRound(LoopRound),
    PuttingTest(PuttingTestSession),
    WedgeLadder(WedgeLadderSession),
}

impl PracticeRecord {
    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            Self::Session(s) => s.category,
            Self::Test(_) => Category::Testing,
            Self::LoopRound(_) => Category::ThreeHoleLoop,
            Self::PuttingTest(_) => Category::PuttingTesting,
            Self::WedgeLadder(_) => Category::WedgeLadder,
        }
    }

    /// One-line description used by the recent activity list.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Session(s) => s.summary(),
            Self::Test(t) => t.summary(),
            Self::LoopRound(r) => crate::scoring::loop_round::round_summary(r),
            Self::PuttingTest(p) => p.summary(),
            Self::WedgeLadder(w) => w.summary(),
        }
    }

    /// # Errors
    /// Returns `PracticeError::Validation` when the wrapped record is malformed.
    pub fn validate(&self) -> Result<(), PracticeError> {
        match self {
            Self::Session(s) => s.validate(),
            Self::Test(t) => t.validate(),
            Self::LoopRound(r) => r.validate(),
            Self::PuttingTest(p) => p.validate(),
            Self::WedgeLadder(w) => w.validate(),
        }
    }
}

impl Dated for PracticeRecord {
    fn date(&self) -> NaiveDate {
        match self {
            Self::Session(s) => s.date,
            Self::Test(t) => t.date,
            Self::LoopRound(r) => r.date,
            Self::PuttingTest(p) => p.date,
            Self::WedgeLadder(w) => w.date,
        }
    }
}
