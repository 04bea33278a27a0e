//! Comment thread under an article.
//!
//! Seeds come from static content; anything a visitor adds lives only in
//! the page session. Replies nest one level under their parent comment.

use leptos::prelude::*;

use crate::content::comments::seed_comments;
use crate::state::comments::{Comment, ThreadState};

/// The full thread plus the add-comment and reply forms.
#[component]
pub fn CommentThread(article_slug: &'static str) -> impl IntoView {
    let thread = RwSignal::new(ThreadState::seeded(seed_comments(article_slug)));
    // Id of the comment whose reply form is open, if any.
    let reply_target = RwSignal::new(None::<String>);

    let author = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());

    let on_add = move |_| {
        thread.update(|t| t.add_comment(&author.get(), &body.get()));
        author.set(String::new());
        body.set(String::new());
    };

    view! {
        <section class="comment-thread">
            <h2>{move || format!("Comments ({})", thread.with(ThreadState::count))}</h2>
            <ol class="comment-thread__list">
                {move || {
                    thread
                        .with(|t| t.comments.clone())
                        .into_iter()
                        .map(|comment| {
                            view! { <CommentItem comment thread reply_target/> }
                        })
                        .collect::<Vec<_>>()
                }}
            </ol>
            <div class="comment-thread__form">
                <input
                    class="comment-thread__input"
                    type="text"
                    placeholder="Name (optional)"
                    prop:value=move || author.get()
                    on:input=move |ev| author.set(event_target_value(&ev))
                />
                <textarea
                    class="comment-thread__input"
                    placeholder="Say something"
                    prop:value=move || body.get()
                    on:input=move |ev| body.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" on:click=on_add>
                    "Post comment"
                </button>
            </div>
        </section>
    }
}

/// One top-level comment with its replies and an inline reply form.
#[component]
fn CommentItem(
    comment: Comment,
    thread: RwSignal<ThreadState>,
    reply_target: RwSignal<Option<String>>,
) -> impl IntoView {
    let comment_id = comment.id.clone();
    let toggle_id = comment.id.clone();
    let form_id = comment.id.clone();

    let reply_open = move || reply_target.with(|t| t.as_deref() == Some(comment_id.as_str()));

    view! {
        <li class="comment">
            <span class="comment__meta">{comment.author.clone()} " \u{b7} " {comment.posted_on.clone()}</span>
            <p class="comment__body">{comment.body.clone()}</p>
            <button
                class="comment__reply-toggle"
                on:click=move |_| {
                    reply_target.update(|t| {
                        if t.as_deref() == Some(toggle_id.as_str()) {
                            *t = None;
                        } else {
                            *t = Some(toggle_id.clone());
                        }
                    });
                }
            >
                "Reply"
            </button>
            <Show when=reply_open>
                <ReplyForm parent_id=form_id.clone() thread reply_target/>
            </Show>
            <ol class="comment__replies">
                {comment
                    .replies
                    .iter()
                    .map(|reply| {
                        view! {
                            <li class="comment comment--reply">
                                <span class="comment__meta">
                                    {reply.author.clone()} " \u{b7} " {reply.posted_on.clone()}
                                </span>
                                <p class="comment__body">{reply.body.clone()}</p>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ol>
        </li>
    }
}

/// Inline form for replying to one comment.
#[component]
fn ReplyForm(
    parent_id: String,
    thread: RwSignal<ThreadState>,
    reply_target: RwSignal<Option<String>>,
) -> impl IntoView {
    let author = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());

    let on_reply = move |_| {
        thread.update(|t| t.add_reply(&parent_id, &author.get(), &body.get()));
        reply_target.set(None);
    };

    view! {
        <div class="comment__reply-form">
            <input
                class="comment-thread__input"
                type="text"
                placeholder="Name (optional)"
                prop:value=move || author.get()
                on:input=move |ev| author.set(event_target_value(&ev))
            />
            <textarea
                class="comment-thread__input"
                placeholder="Your reply"
                prop:value=move || body.get()
                on:input=move |ev| body.set(event_target_value(&ev))
            ></textarea>
            <button class="btn" on:click=on_reply>
                "Post reply"
            </button>
        </div>
    }
}
