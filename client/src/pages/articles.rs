//! Article list page.

use leptos::prelude::*;

use crate::components::article_card::ArticleCard;
use crate::content::articles;

/// `/articles` — every article, newest first.
#[component]
pub fn ArticlesPage() -> impl IntoView {
    view! {
        <div class="articles-page">
            <h1>"Articles"</h1>
            <div class="articles-page__list">
                {articles::articles()
                    .into_iter()
                    .map(|article| view! { <ArticleCard article/> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
