//! Portfolio page with category filter chips.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::content::portfolio::{self, Category};

/// `/portfolio` — case studies, filterable by category or grouped when no
/// filter is active.
#[component]
pub fn PortfolioPage() -> impl IntoView {
    let active = RwSignal::new(None::<Category>);

    view! {
        <div class="portfolio-page">
            <h1>"Portfolio"</h1>
            <div class="portfolio-page__filters">
                <button
                    class="btn"
                    class:btn--primary=move || active.get().is_none()
                    on:click=move |_| active.set(None)
                >
                    "All"
                </button>
                {Category::all()
                    .iter()
                    .map(|&category| {
                        view! {
                            <button
                                class="btn"
                                class:btn--primary=move || active.get() == Some(category)
                                on:click=move |_| active.set(Some(category))
                            >
                                {category.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            {move || match active.get() {
                Some(category) => {
                    view! {
                        <div class="portfolio-page__grid">
                            {portfolio::filtered(Some(category))
                                .into_iter()
                                .map(|project| view! { <ProjectCard project/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <div class="portfolio-page__groups">
                            {portfolio::grouped()
                                .into_iter()
                                .map(|(category, members)| {
                                    view! {
                                        <section class="portfolio-page__group">
                                            <h2>{category.label()}</h2>
                                            <div class="portfolio-page__grid">
                                                {members
                                                    .into_iter()
                                                    .map(|project| view! { <ProjectCard project/> })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        </section>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
