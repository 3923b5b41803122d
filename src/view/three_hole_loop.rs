use maud::{Markup, html};

use crate::controller::three_hole_loop::LoopData;
use crate::model::format_display_date;
use crate::view::utils::{metric, one_decimal, pct, signed, trend_table};

pub fn render_loop(data: &LoopData) -> Markup {
    let score_values: Vec<_> = data.scoring_trend.iter().map(|p| (p.date, p.value)).collect();
    let score_rolling: Vec<_> = data.scoring_trend.iter().map(|p| (p.date, p.rolling)).collect();
    html! {
        div class="metrics" {
            (metric("Rounds", &data.rounds_played.to_string()))
            (metric("Scoring Avg", &one_decimal(data.scoring_average)))
            (metric("vs Par", &signed(data.scoring_average_vs_par)))
            (metric("Fairways", &pct(data.fairway_pct)))
            (metric("GIR", &pct(data.gir_pct)))
            (metric("Up & Down", &pct(data.up_down_pct)))
            (metric("Penalties / Round", &one_decimal(data.penalties_per_round)))
            (metric("Rounds w/ Penalty", &data.rounds_with_penalty.to_string()))
        }

        h3 { "Per Hole" }
        table class="styled-table" {
            thead { tr { th { "Hole" } th { "Par" } th { "Avg" } th { "vs Par" } } }
            tbody {
                @for hole in &data.per_hole {
                    tr {
                        td { (hole.hole) }
                        td { (hole.par) }
                        td { (one_decimal(hole.average_score)) }
                        td { (signed(hole.average_vs_par)) }
                    }
                }
            }
        }

        (trend_table("Scoring Trend", &score_values, &score_rolling))

        h3 { "Round History" }
        table class="styled-table" {
            thead { tr { th { "Date" } th { "Score" } th { "vs Par" } th { "Stats" } } }
            tbody {
                @for row in &data.history {
                    tr {
                        td { (format_display_date(row.date)) }
                        td { (row.total_score) }
                        td { (format!("{:+}", row.vs_par)) }
                        td { (row.summary) }
                    }
                }
            }
        }
    }
}
