mod common;

use std::fs;

use golf_practice::config::{LOOKUP_FILE, ReferenceData};
use golf_practice::error::PracticeError;
use golf_practice::model::{Category, ShotType};

use common::{LOOKUP_JSON, reference_data, scratch_dir};

#[test]
fn test_fixture_reference_data() {
    let reference = reference_data();
    let goals = reference.goals.as_ref().unwrap();
    assert_eq!(goals.big_goals.len(), 2);
    assert_eq!(goals.sub_goal_count(), 4);
    assert_eq!(goals.sub_goals.keys().next().unwrap(), "Putting");

    let drills = reference.drills.as_ref().unwrap();
    assert_eq!(drills.len(), 3);
    let ball_striking = reference.drills_for(Category::BallStriking);
    assert_eq!(ball_striking.len(), 1);
    assert_eq!(ball_striking[0].name, "Towel drill");
    assert_eq!(reference.drills_for(Category::Putting)[0].levels.len(), 2);
    assert!(reference.lookup.entries(ShotType::Flop).is_some());
}

#[test]
fn test_missing_goals_and_drills_are_not_fatal() {
    let dir = scratch_dir("reference_partial");
    fs::write(dir.join(LOOKUP_FILE), LOOKUP_JSON).unwrap();

    let reference = ReferenceData::load_from_dir(&dir).unwrap();
    assert!(reference.goals.is_none());
    assert!(reference.drills.is_none());
    assert_eq!(reference.lookup.len(), 5);
}

#[test]
fn test_missing_lookup_is_an_error() {
    let dir = scratch_dir("reference_empty");
    assert!(matches!(
        ReferenceData::load_from_dir(&dir),
        Err(PracticeError::Io(_))
    ));
}

#[test]
fn test_malformed_lookup_is_rejected() {
    let unsorted = r#"{"Flop": [{"score": 4, "handicap": 1.0}, {"score": 2, "handicap": 0.0}]}"#;
    assert!(matches!(
        ReferenceData::from_json_strs(None, None, unsorted),
        Err(PracticeError::Validation(_))
    ));
    assert!(matches!(
        ReferenceData::from_json_strs(None, None, "not json"),
        Err(PracticeError::Parse(_))
    ));
}

#[test]
fn test_goal_groups_and_levels_keep_file_order() {
    let goals = r#"{"sub_goals": {
        "Goal 2 (Irons)": ["Hit 8 of 12 greens"],
        "Goal 10 (Putting)": ["No three-putts"],
        "Goal 1 (Driver)": ["Find 9 fairways"]
    }}"#;
    let drills = r#"[{"name": "3-foot Putt", "levels": {"Level 2": "50 in a row", "Level 10": "500 in a row", "Level 1": "20 in a row"}}]"#;
    let reference = ReferenceData::from_json_strs(Some(goals), Some(drills), LOOKUP_JSON).unwrap();

    let groups: Vec<&str> = reference.goals.as_ref().unwrap().sub_goals.keys().collect();
    assert_eq!(groups, ["Goal 2 (Irons)", "Goal 10 (Putting)", "Goal 1 (Driver)"]);
    let levels: Vec<&str> = reference.drills.as_ref().unwrap()[0].levels.keys().collect();
    assert_eq!(levels, ["Level 2", "Level 10", "Level 1"]);

    let json = serde_json::to_string(&reference.goals).unwrap();
    assert!(json.find("Goal 2").unwrap() < json.find("Goal 10").unwrap());
}
