mod common;

use scraper::{Html, Selector};

use golf_practice::controller::dashboard::get_data_for_dashboard;
use golf_practice::controller::three_hole_loop::get_data_for_loop;
use golf_practice::model::{Category, PracticeRecord, PracticeSession};
use golf_practice::storage::{MemoryStorage, Storage};
use golf_practice::view;

use common::{date, plain_round, reference_data};

fn cells(html: &str, selector: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let sel = Selector::parse(selector).expect("valid selector");
    doc.select(&sel)
        .map(|e| e.text().collect::<String>().trim().to_string())
        .collect()
}

#[test]
fn test_dashboard_page() -> Result<(), Box<dyn std::error::Error>> {
    let store = MemoryStorage::new();
    store.append(
        Category::BallStriking,
        PracticeRecord::Session(
            PracticeSession::new(Category::BallStriking, date(2026, 10, 18))
                .with_drill("towel_drill_3x", 2),
        ),
    )?;
    store.append(
        Category::ThreeHoleLoop,
        PracticeRecord::LoopRound(plain_round(date(2026, 10, 19), [5, 3, 4])),
    )?;

    let reference = reference_data();
    let data = get_data_for_dashboard(&store, &reference, date(2026, 10, 19))?;
    assert_eq!(data.streaks.current_streak, 2);

    let html = view::page("Golf Practice Tracker", view::render_dashboard(&data)).into_string();
    let metrics = cells(&html, ".metric-value");
    assert_eq!(metrics[0], "2");
    assert_eq!(metrics[1], "2 days");

    let details = cells(&html, "table.styled-table td");
    assert!(details.iter().any(|c| c == "Towel Drill 3X: 2"));
    assert!(details.iter().any(|c| c == "FW 0/2 | GIR 0/3"));
    assert!(cells(&html, "li").iter().any(|g| g == "Break 80 on a full round"));
    Ok(())
}

#[test]
fn test_loop_page_without_rounds_shows_markers() -> Result<(), Box<dyn std::error::Error>> {
    let store = MemoryStorage::new();
    let data = get_data_for_loop(&store, 3)?;
    let html = view::render_loop(&data).into_string();
    let metrics = cells(&html, ".metric-value");
    assert_eq!(metrics[0], "0");
    assert_eq!(metrics[1], "—");
    assert_eq!(metrics[3], "—");
    Ok(())
}

#[test]
fn test_drills_page_groups_by_category() {
    let reference = reference_data();
    let html = view::render_drills(&reference).into_string();
    let headings = cells(&html, "h4");
    assert_eq!(headings, vec!["Towel drill", "3-foot Putt"]);
}
