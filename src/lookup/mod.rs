//! Raw short-game test scores to handicap values.
//!
//! Each shot type has its own table of `(score, handicap)` pairs stored with
//! ascending score thresholds. The table is walked in stored order and the
//! handicap of the first threshold the raw score does not exceed is returned;
//! a score past every threshold gets the last entry. Whether a higher raw score
//! is better is a property of each table's handicap column, never assumed.

pub mod scorecard;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::PracticeError;
use crate::model::ShotType;

pub use scorecard::*;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct LookupEntry {
    pub score: u32,
    pub handicap: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Handicaps fall as the raw score rises.
    HigherIsBetter,
    LowerIsBetter,
    Flat,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HandicapLookupTable {
    tables: BTreeMap<ShotType, Vec<LookupEntry>>,
}

impl HandicapLookupTable {
    /// Parses the `testing_lookup.json` shape: display name -> list of `{score, handicap}`.
    ///
    /// # Errors
    /// Returns `PracticeError::Parse` for malformed JSON, `PracticeError::Lookup`
    /// for a key that is not a shot type, and `PracticeError::Validation` when a
    /// table's thresholds are not strictly ascending or its handicaps are not monotone.
    pub fn from_json_str(json: &str) -> Result<Self, PracticeError> {
        let raw: BTreeMap<String, Vec<LookupEntry>> = serde_json::from_str(json)?;
        let mut parsed = Vec::with_capacity(raw.len());
        for (name, entries) in raw {
            let shot_type: ShotType = name.parse()?;
            parsed.push((shot_type, entries));
        }
        Self::from_entries(parsed)
    }

    /// # Errors
    /// Returns `PracticeError::Validation` for duplicate shot types, thresholds
    /// that are not strictly ascending, or a handicap column that changes direction.
    pub fn from_entries<I>(entries: I) -> Result<Self, PracticeError>
    where
        I: IntoIterator<Item = (ShotType, Vec<LookupEntry>)>,
    {
        let mut tables = BTreeMap::new();
        for (shot_type, rows) in entries {
            if rows.windows(2).any(|w| w[0].score >= w[1].score) {
                return Err(PracticeError::validation(format!(
                    "lookup table for {shot_type} must have strictly ascending scores"
                )));
            }
            let rising = rows.windows(2).all(|w| w[0].handicap <= w[1].handicap);
            let falling = rows.windows(2).all(|w| w[0].handicap >= w[1].handicap);
            if !rising && !falling {
                return Err(PracticeError::validation(format!(
                    "lookup table for {shot_type} must have handicaps moving one way"
                )));
            }
            if tables.insert(shot_type, rows).is_some() {
                return Err(PracticeError::validation(format!(
                    "lookup table for {shot_type} defined twice"
                )));
            }
        }
        log::debug!("loaded handicap lookup tables for {} shot types", tables.len());
        Ok(Self { tables })
    }

    #[must_use]
    pub fn entries(&self, shot_type: ShotType) -> Option<&[LookupEntry]> {
        self.tables.get(&shot_type).map(Vec::as_slice)
    }

    pub fn shot_types(&self) -> impl Iterator<Item = ShotType> + '_ {
        self.tables.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    fn table(&self, shot_type: ShotType) -> Result<&[LookupEntry], PracticeError> {
        match self.tables.get(&shot_type) {
            Some(rows) if !rows.is_empty() => Ok(rows),
            Some(_) => Err(PracticeError::lookup(format!(
                "lookup table for {shot_type} is empty"
            ))),
            None => Err(PracticeError::lookup(format!(
                "no lookup table for {shot_type}"
            ))),
        }
    }

    /// # Errors
    /// Returns `PracticeError::Validation` for a negative score and
    /// `PracticeError::Lookup` when the shot type has no (or an empty) table.
    pub fn handicap_for(&self, shot_type: ShotType, raw_score: i64) -> Result<f64, PracticeError> {
        if raw_score < 0 {
            return Err(PracticeError::validation(format!(
                "{shot_type}: raw score {raw_score} is negative"
            )));
        }
        let rows = self.table(shot_type)?;
        let hit = rows
            .iter()
            .find(|row| raw_score <= i64::from(row.score))
            .or_else(|| rows.last());
        // table() guarantees at least one row
        Ok(hit.map_or(0.0, |row| row.handicap))
    }

    /// Same as [`Self::handicap_for`] with the shot type given by name.
    ///
    /// # Errors
    /// Returns `PracticeError::Lookup` for an unknown shot type name.
    pub fn handicap_for_name(&self, shot_type: &str, raw_score: i64) -> Result<f64, PracticeError> {
        self.handicap_for(shot_type.parse()?, raw_score)
    }

    /// # Errors
    /// Returns `PracticeError::Lookup` when the shot type has no (or an empty) table.
    pub fn direction(&self, shot_type: ShotType) -> Result<Direction, PracticeError> {
        let rows = self.table(shot_type)?;
        let (first, last) = (rows[0].handicap, rows[rows.len() - 1].handicap);
        Ok(if first > last {
            Direction::HigherIsBetter
        } else if first < last {
            Direction::LowerIsBetter
        } else {
            Direction::Flat
        })
    }

    /// Highest threshold in the table, used to bound score entry.
    #[must_use]
    pub fn max_score(&self, shot_type: ShotType) -> Option<u32> {
        self.entries(shot_type)?.last().map(|row| row.score)
    }
}
