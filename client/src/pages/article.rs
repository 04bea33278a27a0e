//! Article detail page with rendered markdown and the comment thread.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::comment_thread::CommentThread;
use crate::content::articles;
use crate::util::markdown;

/// `/articles/:slug` — one article, or a not-found view for unknown slugs.
#[component]
pub fn ArticlePage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug").unwrap_or_default());

    move || match articles::find(&slug()) {
        Some(article) => {
            let body_html = markdown::render(article.body);
            view! {
                <article class="article-page">
                    <span class="article-page__date">{article.published_on}</span>
                    <h1>{article.title}</h1>
                    <div class="article-page__body" inner_html=body_html></div>
                    <CommentThread article_slug=article.slug/>
                </article>
            }
            .into_any()
        }
        None => {
            view! {
                <div class="article-page article-page--missing">
                    <h1>"Not found"</h1>
                    <p>"No article lives at this address. " <a href="/articles">"Back to the list"</a></p>
                </div>
            }
            .into_any()
        }
    }
}
