mod common;

use golf_practice::controller::putting::build_putting_data;
use golf_practice::error::PracticeError;
use golf_practice::model::{
    Aggregate, Category, LadderMode, LagCell, LukeDonaldPutt, PracticeRecord, PuttingTest,
    PuttingTestKind, PuttingTestSession, Slope, WedgeLadderSession,
};
use golf_practice::scoring::{
    LUKE_DONALD_DISTANCES, LUKE_DONALD_HOLES, calculate_grade, ladder_distances, ladder_summary,
    putting_summary, shot_results,
};
use golf_practice::storage::{MemoryStorage, Storage};

use common::date;

fn swedish(day: u32, metres: f64) -> PuttingTestSession {
    PuttingTestSession::swedish(date(2026, 6, day), vec![metres; 18]).unwrap()
}

fn lag(day: u32, per_cell: u32) -> PuttingTestSession {
    let cells = [30, 40, 50]
        .into_iter()
        .flat_map(|d| {
            [Slope::Uphill, Slope::Downhill].map(|slope| LagCell {
                distance_ft: d,
                slope,
                in_box: per_cell,
            })
        })
        .collect();
    PuttingTestSession {
        date: date(2026, 6, day),
        test: PuttingTest::Lag { cells },
    }
}

fn luke_donald(day: u32, makes: usize) -> PuttingTestSession {
    let putts = LUKE_DONALD_HOLES
        .iter()
        .flat_map(|&hole| LUKE_DONALD_DISTANCES.map(|d| (hole, d)))
        .enumerate()
        .map(|(i, (hole, distance_ft))| LukeDonaldPutt {
            hole,
            distance_ft,
            made: i < makes,
        })
        .collect();
    PuttingTestSession {
        date: date(2026, 6, day),
        test: PuttingTest::LukeDonald { putts },
    }
}

#[test]
fn test_swedish_session_scores_and_handicap() {
    // every putt left inside half a metre: 18 birdies
    let session = swedish(1, 0.4);
    assert_eq!(session.score(), -18);
    match session.test {
        PuttingTest::Swedish { putting_hcp, .. } => assert_eq!(putting_hcp, -2.0),
        _ => unreachable!(),
    }
    assert!(PuttingTestSession::swedish(date(2026, 6, 1), vec![1.0; 17]).is_err());
    assert!(PuttingTestSession::swedish(date(2026, 6, 1), vec![-1.0; 18]).is_err());
    assert_eq!(session.summary(), "Swedish Drill: -18, HCP -2.0");
}

#[test]
fn test_putting_summaries_per_kind() {
    let sessions = vec![
        lag(1, 3),
        swedish(2, 1.5),
        luke_donald(3, 16),
        swedish(4, 0.8),
        luke_donald(5, 10),
    ];

    let lag_summary = putting_summary(&sessions, PuttingTestKind::Lag);
    assert_eq!(lag_summary.sessions, 1);
    assert_eq!(lag_summary.best, Some(18));

    let sw = putting_summary(&sessions, PuttingTestKind::Swedish);
    assert_eq!(sw.best, Some(0));
    assert_eq!(sw.average, Aggregate::Value(9.0));
    assert_eq!(sw.latest_handicap, Some(-2.0));

    let ld = putting_summary(&sessions, PuttingTestKind::LukeDonald);
    assert_eq!(ld.best, Some(16));
    assert_eq!(ld.goal_hits, Some(1));
    assert_eq!(ld.average, Aggregate::Value(13.0));

    let page = build_putting_data(&sessions, 3).unwrap();
    assert_eq!(page.summaries.len(), 3);
    assert_eq!(page.swedish_level, Some("+2 HCP"));
    let four_ft = &page.luke_donald_by_distance[0];
    assert_eq!(four_ft.distance_ft, 4);
    assert_eq!(four_ft.attempts, 8);
}

#[test]
fn test_lag_validation() {
    assert!(lag(1, 0).validate().is_err());
    assert!(lag(1, 6).validate().is_err());
    assert!(lag(1, 5).validate().is_ok());
    assert_eq!(lag(1, 5).summary(), "Lag Drill: 30/30");
}

#[test]
fn test_wedge_ladder_session_flow() {
    let targets = ladder_distances(40, 60, LadderMode::InOrder).unwrap();
    let actuals = [41, 44, 53, 55, 66];
    let grade = calculate_grade(&targets, &actuals).unwrap();
    // misses 1, 1, 3, 0, 6
    assert_eq!(grade.band(5).unwrap().within, 4);
    assert_eq!(grade.band(5).unwrap().pct, 80.0);
    assert_eq!(grade.band(3).unwrap().pct, 80.0);
    assert_eq!(grade.band(2).unwrap().pct, 60.0);
    assert_eq!(grade.grade, 4);

    let rows = shot_results(&targets, &actuals);
    assert_eq!(rows[4].diff, 6);
    assert!(!rows[4].within_five);

    let session =
        WedgeLadderSession::from_grade(date(2026, 6, 8), LadderMode::InOrder, 40, 60, &grade);
    assert_eq!(session.total_shots, 5);
    assert_eq!(session.pct_within_4, 80.0);
    assert!(session.validate().is_ok());

    let store = MemoryStorage::new();
    store
        .append(Category::WedgeLadder, PracticeRecord::WedgeLadder(session.clone()))
        .unwrap();
    let mut weaker = session;
    weaker.grade = 2;
    let summary = ladder_summary(&[weaker.clone(), weaker]);
    assert_eq!(summary.best_grade, Some(2));
    assert_eq!(summary.average_grade, Aggregate::Value(2.0));
    assert_eq!(store.load(Category::WedgeLadder).unwrap().len(), 1);
}

fn graded_ladder() -> WedgeLadderSession {
    let targets = ladder_distances(40, 60, LadderMode::InOrder).unwrap();
    let grade = calculate_grade(&targets, &[41, 44, 53, 55, 66]).unwrap();
    WedgeLadderSession::from_grade(date(2026, 6, 9), LadderMode::InOrder, 40, 60, &grade)
}

#[test]
fn test_inconsistent_wedge_ladder_records_are_rejected() {
    let store = MemoryStorage::new();
    let rejected = |session: WedgeLadderSession| {
        matches!(
            store.append(Category::WedgeLadder, PracticeRecord::WedgeLadder(session)),
            Err(PracticeError::Validation(_))
        )
    };

    let mut out_of_range = graded_ladder();
    out_of_range.start_distance = 0;
    out_of_range.end_distance = 900;
    assert!(rejected(out_of_range));

    let mut no_shots = graded_ladder();
    no_shots.total_shots = 0;
    assert!(rejected(no_shots));

    let mut wrong_count = graded_ladder();
    wrong_count.total_shots = 7;
    assert!(rejected(wrong_count));

    let mut inflated = graded_ladder();
    inflated.grade = 5;
    assert!(rejected(inflated));

    let mut unearned = graded_ladder();
    unearned.pct_within_5 = 0.0;
    unearned.pct_within_4 = 0.0;
    unearned.pct_within_3 = 0.0;
    unearned.pct_within_2 = 0.0;
    assert!(rejected(unearned));

    assert!(store.load(Category::WedgeLadder).unwrap().is_empty());
    store
        .append(Category::WedgeLadder, PracticeRecord::WedgeLadder(graded_ladder()))
        .unwrap();
    assert_eq!(store.load(Category::WedgeLadder).unwrap().len(), 1);
}

#[test]
fn test_swedish_handicap_must_follow_the_total() {
    let store = MemoryStorage::new();
    let imported = |total_score: i32, putting_hcp: f64| {
        PracticeRecord::PuttingTest(PuttingTestSession {
            date: date(2026, 6, 10),
            test: PuttingTest::Swedish {
                putts_m: Vec::new(),
                total_score,
                putting_hcp,
            },
        })
    };

    assert!(matches!(
        store.append(Category::PuttingTesting, imported(0, 9.9)),
        Err(PracticeError::Validation(_))
    ));
    // a total of +2 sits on the scratch point of the curve
    store
        .append(Category::PuttingTesting, imported(2, 0.0))
        .unwrap();

    let mut scored = swedish(11, 0.4);
    if let PuttingTest::Swedish { putting_hcp, .. } = &mut scored.test {
        *putting_hcp = 3.0;
    }
    assert!(scored.validate().is_err());
    assert_eq!(store.load(Category::PuttingTesting).unwrap().len(), 1);
}
