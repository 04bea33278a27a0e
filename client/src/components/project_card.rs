//! Card for one portfolio case study.

use leptos::prelude::*;

use crate::content::portfolio::Project;

/// A case-study card: title, client, year, stack, optional external link.
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let byline = match project.client_name {
        Some(client_name) => format!("{client_name} \u{b7} {}", project.year),
        None => format!("Personal \u{b7} {}", project.year),
    };

    view! {
        <article class="project-card">
            <h3 class="project-card__title">{project.title}</h3>
            <span class="project-card__byline">{byline}</span>
            <p class="project-card__summary">{project.summary}</p>
            <span class="project-card__stack">
                {project
                    .stack
                    .iter()
                    .map(|tech| view! { <span class="tag">{*tech}</span> })
                    .collect::<Vec<_>>()}
            </span>
            {project
                .url
                .map(|url| {
                    view! {
                        <a class="project-card__link" href=url target="_blank" rel="noreferrer">
                            "View project"
                        </a>
                    }
                })}
        </article>
    }
}
