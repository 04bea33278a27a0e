//! Card for one article on the list page.

use leptos::prelude::*;

use crate::content::articles::Article;

/// A clickable summary card linking to the article page.
#[component]
pub fn ArticleCard(article: Article) -> impl IntoView {
    let href = format!("/articles/{}", article.slug);

    view! {
        <a class="article-card" href=href>
            <span class="article-card__date">{article.published_on}</span>
            <h3 class="article-card__title">{article.title}</h3>
            <p class="article-card__summary">{article.summary}</p>
            <span class="article-card__tags">
                {article
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="tag">{*tag}</span> })
                    .collect::<Vec<_>>()}
            </span>
        </a>
    }
}
