//! Work experience timeline for the home page.

use leptos::prelude::*;

use crate::content::experience;

/// Renders the experience entries as a vertical timeline.
#[component]
pub fn ExperienceTimeline() -> impl IntoView {
    view! {
        <ol class="experience-timeline">
            {experience::entries()
                .into_iter()
                .map(|entry| {
                    let span = match entry.end {
                        Some(end) => format!("{} \u{2013} {}", entry.start, end),
                        None => format!("{} \u{2013} now", entry.start),
                    };
                    view! {
                        <li class="experience-timeline__entry">
                            <span class="experience-timeline__span">{span}</span>
                            <h3 class="experience-timeline__role">
                                {entry.role} " \u{b7} " {entry.company}
                            </h3>
                            <p>{entry.summary}</p>
                            <ul class="experience-timeline__highlights">
                                {entry
                                    .highlights
                                    .iter()
                                    .map(|h| view! { <li>{*h}</li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ol>
    }
}
