use maud::{Markup, html};

use crate::config::ReferenceData;
use crate::model::{Category, Drill, Goals};

pub fn render_goals(goals: Option<&Goals>) -> Markup {
    html! {
        @match goals {
            None => {
                p class="empty" { "No goals loaded." }
            }
            Some(goals) => {
                h3 { "Big Goals" }
                ul { @for g in &goals.big_goals { li { (g) } } }
                h3 { "Component Goals" }
                ul { @for g in &goals.component_goals { li { (g) } } }
                @for (group, items) in &goals.sub_goals {
                    h4 { (group) }
                    ul { @for item in items { li { (item) } } }
                }
            }
        }
    }
}

fn render_drill_list(drills: &[&Drill]) -> Markup {
    html! {
        @for drill in drills {
            h4 { (drill.name) }
            @if let Some(desc) = &drill.description {
                p { (desc) }
            }
            @if !drill.levels.is_empty() {
                dl {
                    @for (level, criteria) in &drill.levels {
                        dt { (level) }
                        dd { (criteria) }
                    }
                }
            }
        }
    }
}

pub fn render_drills(reference: &ReferenceData) -> Markup {
    if reference.drills.is_none() {
        return html! { p class="empty" { "No drill data found." } };
    }
    html! {
        @for category in [Category::BallStriking, Category::Putting] {
            h3 { (category.label()) }
            (render_drill_list(&reference.drills_for(category)))
        }
    }
}
