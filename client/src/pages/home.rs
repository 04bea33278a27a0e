//! Home page: hero, experience timeline, and the contact form.

use leptos::prelude::*;

use crate::components::experience_timeline::ExperienceTimeline;
use crate::net::api::ContactRequest;

/// Landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Hi, I'm Frida. I build software for small, stubborn teams."</h1>
                <p>
                    "Freelance developer \u{2014} product engineering end to end, from the first "
                    "scoping call to the pager. I write about the craft in the "
                    <a href="/articles">"articles"</a> ", show finished work in the "
                    <a href="/portfolio">"portfolio"</a>
                    ", and keep an annotated photo of my desk on the "
                    <a href="/workspace">"workspace page"</a> "."
                </p>
            </section>

            <section class="home-page__experience">
                <h2>"Experience"</h2>
                <ExperienceTimeline/>
            </section>

            <section class="home-page__contact">
                <h2>"Get in touch"</h2>
                <ContactForm/>
            </section>
        </div>
    }
}

/// Status of the contact form submission.
#[derive(Clone, Copy, PartialEq, Eq)]
enum SendState {
    Idle,
    Sending,
    Sent,
    Failed,
}

/// Minimal contact form posting to `/api/contact`.
#[component]
fn ContactForm() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let send_state = RwSignal::new(SendState::Idle);

    let on_send = move |_| {
        if send_state.get_untracked() == SendState::Sending {
            return;
        }
        let request = ContactRequest {
            email: email.get_untracked().trim().to_owned(),
            message: message.get_untracked().trim().to_owned(),
        };
        if request.email.is_empty() || request.message.is_empty() {
            send_state.set(SendState::Failed);
            return;
        }
        send_state.set(SendState::Sending);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if crate::net::api::send_contact(&request).await {
                send_state.set(SendState::Sent);
                email.set(String::new());
                message.set(String::new());
            } else {
                send_state.set(SendState::Failed);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <div class="contact-form">
            <input
                class="contact-form__input"
                type="email"
                placeholder="you@example.com"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <textarea
                class="contact-form__input"
                placeholder="What can I help with?"
                prop:value=move || message.get()
                on:input=move |ev| message.set(event_target_value(&ev))
            ></textarea>
            <button
                class="btn btn--primary"
                disabled=move || send_state.get() == SendState::Sending
                on:click=on_send
            >
                "Send"
            </button>
            {move || match send_state.get() {
                SendState::Sent => {
                    Some(
                        view! { <p class="contact-form__ok">"Thanks \u{2014} I'll reply within a day or two."</p> }
                            .into_any(),
                    )
                }
                SendState::Failed => {
                    Some(
                        view! { <p class="contact-form__error">"That didn't go through. Check the fields and try again."</p> }
                            .into_any(),
                    )
                }
                SendState::Idle | SendState::Sending => None,
            }}
        </div>
    }
}
