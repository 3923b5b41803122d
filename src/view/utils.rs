use chrono::NaiveDate;
use maud::{DOCTYPE, Markup, html};

use crate::model::{Aggregate, format_display_date};

/// Ratio in 0..1 as a whole percent, or the no-data marker.
#[must_use]
pub fn pct(value: Aggregate) -> String {
    match value.map(|v| v * 100.0) {
        Aggregate::NoData => value.to_string(),
        v => format!("{v:.0}%"),
    }
}

#[must_use]
pub fn one_decimal(value: Aggregate) -> String {
    format!("{value:.1}")
}

#[must_use]
pub fn signed(value: Aggregate) -> String {
    match value {
        Aggregate::NoData => value.to_string(),
        Aggregate::Value(v) => format!("{v:+.1}"),
    }
}

#[must_use]
pub fn opt_value(value: Option<f64>) -> String {
    value.map_or_else(|| "—".to_string(), |v| format!("{v:.1}"))
}

pub fn metric(label: &str, value: &str) -> Markup {
    html! {
        div class="metric" {
            span class="metric-label" { (label) }
            " "
            span class="metric-value" { (value) }
        }
    }
}

/// Date/value/rolling rows under a chart heading.
pub fn trend_table(
    title: &str,
    values: &[(NaiveDate, Option<f64>)],
    rolling: &[(NaiveDate, Option<f64>)],
) -> Markup {
    html! {
        h3 { (title) }
        @if values.is_empty() {
            p class="empty" { "Nothing logged yet." }
        } @else {
            table class="styled-table" {
                thead { tr { th { "Date" } th { "Value" } th { "Rolling" } } }
                tbody {
                    @for ((date, value), (_, avg)) in values.iter().zip(rolling) {
                        tr {
                            td { (format_display_date(*date)) }
                            td { (opt_value(*value)) }
                            td { (opt_value(*avg)) }
                        }
                    }
                }
            }
        }
    }
}

pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
            }
            body {
                h1 { (title) }
                (body)
            }
        }
    }
}
