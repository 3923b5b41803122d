mod common;

use golf_practice::error::PracticeError;
use golf_practice::lookup::{
    Direction, HandicapLookupTable, HistoryMetric, history_series, score_test, testing_history,
};
use golf_practice::model::{Aggregate, ShotType, TestResult};

use common::{LOOKUP_JSON, date};

fn table() -> HandicapLookupTable {
    HandicapLookupTable::from_json_str(LOOKUP_JSON).expect("fixture lookup parses")
}

#[test]
fn test_exact_threshold_returns_its_handicap() {
    let t = table();
    assert_eq!(t.handicap_for(ShotType::FiftyYardsF, 30).unwrap(), 10.0);
    assert_eq!(t.handicap_for_name("50 Yards F", 50).unwrap(), 0.0);
    assert_eq!(t.handicap_for_name("50_yards_f", 10).unwrap(), 20.0);
}

#[test]
fn test_scores_between_thresholds_take_the_next_row() {
    let t = table();
    assert_eq!(t.handicap_for(ShotType::FiftyYardsF, 25).unwrap(), 10.0);
    assert_eq!(t.handicap_for(ShotType::FiftyYardsF, 0).unwrap(), 20.0);
    // past the last threshold
    assert_eq!(t.handicap_for(ShotType::FiftyYardsF, 75).unwrap(), 0.0);
}

#[test]
fn test_bad_inputs() {
    let t = table();
    assert!(matches!(
        t.handicap_for(ShotType::FiftyYardsF, -1),
        Err(PracticeError::Validation(_))
    ));
    assert!(matches!(
        t.handicap_for(ShotType::FifteenYardSand, 10),
        Err(PracticeError::Lookup(_))
    ));
    assert!(matches!(
        t.handicap_for_name("Driver", 10),
        Err(PracticeError::Lookup(_))
    ));
    assert!(matches!(
        HandicapLookupTable::from_json_str(r#"{"Driver": [{"score": 1, "handicap": 1.0}]}"#),
        Err(PracticeError::Lookup(_))
    ));
}

#[test]
fn test_direction_comes_from_the_table() {
    let t = table();
    assert_eq!(t.direction(ShotType::FiftyYardsF).unwrap(), Direction::HigherIsBetter);
    assert_eq!(t.direction(ShotType::Flop).unwrap(), Direction::LowerIsBetter);
    assert_eq!(t.max_score(ShotType::EightYardSand), Some(20));
    assert_eq!(t.len(), 5);
}

#[test]
fn test_scorecard_skips_untested_and_unknown_shots() {
    let t = table();
    let test = TestResult::new(date(2026, 9, 1))
        .with_score(ShotType::FiftyYardsF, 40)
        .with_score(ShotType::Flop, 3)
        .with_score(ShotType::FifteenYardSand, 9)
        .with_score(ShotType::TenFChip, 0);
    let card = score_test(&t, &test);

    assert_eq!(card.shots.len(), ShotType::ALL.len());
    assert_eq!(card.shots_tested, 2);
    assert_eq!(card.average_handicap, Aggregate::Value(5.0));

    let sand = card
        .shots
        .iter()
        .find(|s| s.shot_type == ShotType::FifteenYardSand)
        .unwrap();
    assert_eq!(sand.raw_score, Some(9));
    assert_eq!(sand.handicap, None);

    let chip = card.shots.iter().find(|s| s.shot_type == ShotType::TenFChip).unwrap();
    assert_eq!(chip.raw_score, None);
}

#[test]
fn test_history_is_sorted_and_series_follow_the_metric() {
    let t = table();
    let tests = vec![
        TestResult::new(date(2026, 9, 10)).with_score(ShotType::FiftyYardsF, 50),
        TestResult::new(date(2026, 9, 1))
            .with_score(ShotType::FiftyYardsF, 20)
            .with_score(ShotType::Flop, 1),
        // nothing with a table: no history point
        TestResult::new(date(2026, 9, 5)).with_score(ShotType::FifteenYardSand, 4),
    ];
    let history = testing_history(&t, &tests);
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].date, date(2026, 9, 1));
    assert_eq!(history[0].average_handicap, 7.5);

    let flop = history_series(&history, HistoryMetric::Shot(ShotType::Flop), None);
    assert_eq!(flop, vec![(date(2026, 9, 1), Some(0.0)), (date(2026, 9, 10), None)]);

    let last = history_series(&history, HistoryMetric::Average, Some(1));
    assert_eq!(last, vec![(date(2026, 9, 10), Some(0.0))]);
}

#[test]
fn test_better_raw_scores_never_get_a_worse_handicap() {
    let t = table();
    for shot_type in t.shot_types() {
        let direction = t.direction(shot_type).unwrap();
        let top = i64::from(t.max_score(shot_type).unwrap()) + 5;
        let handicaps: Vec<f64> = (0..=top)
            .map(|raw| t.handicap_for(shot_type, raw).unwrap())
            .collect();
        for pair in handicaps.windows(2) {
            match direction {
                Direction::HigherIsBetter => assert!(pair[1] <= pair[0], "{shot_type}: {pair:?}"),
                Direction::LowerIsBetter => assert!(pair[1] >= pair[0], "{shot_type}: {pair:?}"),
                Direction::Flat => assert_eq!(pair[1], pair[0], "{shot_type}"),
            }
        }
    }
}

#[test]
fn test_table_that_changes_direction_is_rejected() {
    let zigzag = r#"{"Flop": [
        {"score": 1, "handicap": 0.0},
        {"score": 3, "handicap": 10.0},
        {"score": 5, "handicap": 5.0}
    ]}"#;
    assert!(matches!(
        HandicapLookupTable::from_json_str(zigzag),
        Err(PracticeError::Validation(_))
    ));
}
