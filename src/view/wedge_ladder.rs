use maud::{Markup, html};

use crate::controller::wedge_ladder::WedgeData;
use crate::model::format_display_date;
use crate::scoring::MAX_GRADE;
use crate::view::utils::{metric, one_decimal, trend_table};

pub fn render_wedge_ladder(data: &WedgeData) -> Markup {
    let best = data
        .summary
        .best_grade
        .map_or_else(|| "—".to_string(), |g| format!("{g}/{MAX_GRADE}"));
    html! {
        div class="metrics" {
            (metric("Total Sessions", &data.summary.sessions.to_string()))
            (metric("Best Grade", &best))
            (metric("Avg Grade", &one_decimal(data.summary.average_grade)))
        }

        (trend_table("Grade Trend", &data.grades, &data.rolling))

        h3 { "Session History" }
        table class="styled-table" {
            thead {
                tr {
                    th { "Date" } th { "Mode" } th { "Range" } th { "Grade" }
                    th { "≤5 yds %" } th { "≤4 yds %" } th { "≤3 yds %" } th { "≤2 yds %" }
                }
            }
            tbody {
                @for s in &data.sessions {
                    tr {
                        td { (format_display_date(s.date)) }
                        td { (s.mode) }
                        td { (s.start_distance) "-" (s.end_distance) }
                        td { (s.grade) }
                        td { (s.pct_within_5) }
                        td { (s.pct_within_4) }
                        td { (s.pct_within_3) }
                        td { (s.pct_within_2) }
                    }
                }
            }
        }
    }
}
