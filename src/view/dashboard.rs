use maud::{Markup, html};

use crate::controller::dashboard::DashboardData;
use crate::model::format_display_date;
use crate::view::utils::metric;

pub fn render_dashboard(data: &DashboardData) -> Markup {
    let practiced_days = data.heatmap.iter().filter(|(_, n)| *n > 0).count();
    html! {
        div class="metrics" {
            (metric("Total Sessions", &data.total_sessions.to_string()))
            (metric("Current Streak", &format!("{} days", data.streaks.current_streak)))
            (metric("Longest Streak", &format!("{} days", data.streaks.longest_streak)))
            (metric("This Week", &data.this_week.to_string()))
            (metric("This Month", &data.this_month.to_string()))
        }

        h3 { "Practice Frequency" }
        p { (practiced_days) " of " (data.heatmap.len()) " days practiced this year" }
        table class="heatmap" {
            tbody {
                @for (date, count) in data.heatmap.iter().filter(|(_, n)| *n > 0) {
                    tr {
                        td { (format_display_date(*date)) }
                        td { (count) }
                    }
                }
            }
        }

        h3 { "Sessions by Category" }
        table class="styled-table" {
            tbody {
                @for (category, count) in &data.by_category {
                    tr { td { (category.label()) } td { (count) } }
                }
            }
        }

        h3 { "Recent Activity" }
        @if data.recent.is_empty() {
            p class="empty" { "No sessions logged yet." }
        } @else {
            table class="styled-table" {
                thead { tr { th { "Date" } th { "Category" } th { "Details" } } }
                tbody {
                    @for row in &data.recent {
                        tr {
                            td { (format_display_date(row.date)) }
                            td { (row.category.label()) }
                            td { (row.details) }
                        }
                    }
                }
            }
        }

        @if let Some(goals) = &data.goals {
            h3 { "Goals" }
            ul {
                @for goal in &goals.big_goals {
                    li { (goal) }
                }
            }
        }
    }
}
