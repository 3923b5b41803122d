#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::NaiveDate;
use golf_practice::config::ReferenceData;
use golf_practice::model::{HOLES, HoleStats, LoopRound};

pub const LOOKUP_JSON: &str = include_str!("../testing_lookup.json");
pub const GOALS_JSON: &str = include_str!("../goals.json");
pub const DRILLS_JSON: &str = include_str!("../drills.json");

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn reference_data() -> ReferenceData {
    ReferenceData::from_json_strs(Some(GOALS_JSON), Some(DRILLS_JSON), LOOKUP_JSON)
        .expect("fixture reference data parses")
}

/// Fresh scratch directory under the system temp dir.
pub fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "golf_practice_{tag}_{}",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time went backwards")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

/// A round with the given hole scores; no fairways, greens, chances or penalties.
pub fn plain_round(day: NaiveDate, scores: [u32; 3]) -> LoopRound {
    let holes = [0, 1, 2].map(|i| HoleStats {
        score: scores[i],
        ..HoleStats::par_for(HOLES[i])
    });
    LoopRound::new(day, holes).expect("valid round")
}
