use maud::{Markup, html};

use crate::controller::putting::PuttingData;
use crate::model::PuttingTestKind;
use crate::scoring::{LAG_MAX_SCORE, LUKE_DONALD_GOAL, LUKE_DONALD_MAX_SCORE, PuttingSummary};
use crate::view::utils::{metric, one_decimal, pct, trend_table};

fn out_of(kind: PuttingTestKind) -> String {
    match kind {
        PuttingTestKind::Lag => format!("/{LAG_MAX_SCORE}"),
        PuttingTestKind::LukeDonald => format!("/{LUKE_DONALD_MAX_SCORE}"),
        PuttingTestKind::Swedish => String::new(),
    }
}

fn render_summary(summary: &PuttingSummary) -> Markup {
    let suffix = out_of(summary.kind);
    let best = summary.best.map_or_else(
        || "—".to_string(),
        |b| match summary.kind {
            PuttingTestKind::Swedish => format!("{b:+}"),
            _ => format!("{b}{suffix}"),
        },
    );
    html! {
        h3 { (summary.kind.label()) }
        div class="metrics" {
            (metric("Total Sessions", &summary.sessions.to_string()))
            (metric("Best Score", &best))
            (metric("Avg Score", &format!("{}{suffix}", one_decimal(summary.average))))
            @if let Some(hcp) = summary.latest_handicap {
                (metric("Latest HCP", &format!("{hcp:+.1}")))
            }
            @if let Some(hits) = summary.goal_hits {
                (metric(&format!("Goal ({LUKE_DONALD_GOAL}+) Hit"), &format!("{hits}/{}", summary.sessions)))
            }
        }
    }
}

pub fn render_putting(data: &PuttingData) -> Markup {
    html! {
        @for summary in &data.summaries {
            (render_summary(summary))
        }
        @if let Some(level) = data.swedish_level {
            p { "Latest Swedish level: " strong { (level) } }
        }

        h3 { "Luke Donald Makes by Distance" }
        table class="styled-table" {
            thead { tr { th { "Distance" } th { "Made" } th { "Make %" } } }
            tbody {
                @for row in &data.luke_donald_by_distance {
                    tr {
                        td { (row.distance_ft) "ft" }
                        td { (row.made) "/" (row.attempts) }
                        td { (pct(row.pct)) }
                    }
                }
            }
        }

        @for trend in &data.trends {
            (trend_table(&format!("{} Trend", trend.kind.label()), &trend.scores, &trend.rolling))
        }
    }
}
