use std::fs;
use std::path::Path;

use crate::error::PracticeError;
use crate::lookup::HandicapLookupTable;
use crate::model::{Drill, Goals};

pub const GOALS_FILE: &str = "goals.json";
pub const DRILLS_FILE: &str = "drills.json";
pub const LOOKUP_FILE: &str = "testing_lookup.json";

/// Static tables read once at startup and shared by reference afterwards.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    /// `None` when `goals.json` was missing.
    pub goals: Option<Goals>,
    /// `None` when `drills.json` was missing.
    pub drills: Option<Vec<Drill>>,
    pub lookup: HandicapLookupTable,
}

impl ReferenceData {
    /// Loads the three reference files from `dir`.
    ///
    /// # Errors
    /// Returns `PracticeError::Io` when the lookup file cannot be read, and
    /// `PracticeError::Parse`/`Lookup`/`Validation` when any present file is malformed.
    pub fn load_from_dir(dir: &Path) -> Result<Self, PracticeError> {
        let lookup_path = dir.join(LOOKUP_FILE);
        let lookup = fs::read_to_string(&lookup_path).map_err(|e| {
            PracticeError::Io(format!("reading {}: {e}", lookup_path.display()))
        })?;
        let goals = read_optional(dir, GOALS_FILE)?;
        let drills = read_optional(dir, DRILLS_FILE)?;
        Self::from_json_strs(goals.as_deref(), drills.as_deref(), &lookup)
    }

    /// # Errors
    /// Same as [`ReferenceData::load_from_dir`], minus the I/O.
    pub fn from_json_strs(
        goals: Option<&str>,
        drills: Option<&str>,
        lookup: &str,
    ) -> Result<Self, PracticeError> {
        let lookup = HandicapLookupTable::from_json_str(lookup)?;
        let goals = goals.map(|s| serde_json::from_str::<Goals>(s)).transpose()?;
        let drills = drills.map(|s| serde_json::from_str::<Vec<Drill>>(s)).transpose()?;
        log::debug!(
            "reference data: {} lookup tables, goals {}, {} drills",
            lookup.len(),
            if goals.is_some() { "loaded" } else { "not loaded" },
            drills.as_ref().map_or(0, Vec::len)
        );
        Ok(Self {
            goals,
            drills,
            lookup,
        })
    }

    /// Drills described under `category`, in file order.
    #[must_use]
    pub fn drills_for(&self, category: crate::model::Category) -> Vec<&Drill> {
        self.drills
            .iter()
            .flatten()
            .filter(|d| d.category() == Some(category))
            .collect()
    }
}

fn read_optional(dir: &Path, name: &str) -> Result<Option<String>, PracticeError> {
    let path = dir.join(name);
    match fs::read_to_string(&path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::warn!("{} not found; continuing without it", path.display());
            Ok(None)
        }
        Err(e) => Err(PracticeError::Io(format!("reading {}: {e}", path.display()))),
    }
}
