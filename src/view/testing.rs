use maud::{Markup, html};

use crate::controller::testing::TestingData;
use crate::lookup::Direction;
use crate::model::format_display_date;
use crate::view::utils::{metric, one_decimal, opt_value, trend_table};

fn direction_hint(direction: Direction) -> &'static str {
    match direction {
        Direction::HigherIsBetter => "higher raw score is better",
        Direction::LowerIsBetter => "lower raw score is better",
        Direction::Flat => "flat",
    }
}

pub fn render_testing(data: &TestingData) -> Markup {
    html! {
        div class="metrics" {
            (metric("Tests Logged", &data.tests_logged.to_string()))
            @if let Some(card) = &data.latest {
                (metric("Latest Avg Handicap", &one_decimal(card.average_handicap)))
            }
        }

        @if let Some(card) = &data.latest {
            h3 { "Latest Test: " (format_display_date(card.date)) }
            table class="styled-table" {
                thead { tr { th { "Shot" } th { "Score" } th { "Handicap" } } }
                tbody {
                    @for shot in &card.shots {
                        tr {
                            td { (shot.shot_type) }
                            td { (shot.raw_score.map_or_else(|| "—".to_string(), |s| s.to_string())) }
                            td { (opt_value(shot.handicap)) }
                        }
                    }
                }
            }
        }

        (trend_table("Handicap History", &data.series, &data.rolling))

        h3 { "Lookup Tables" }
        ul {
            @for (shot_type, direction) in &data.directions {
                li { (shot_type) ": " (direction_hint(*direction)) }
            }
        }
    }
}
