//! The three-step "buy me a coffee" wizard.
//!
//! Step logic lives in `state::support::SupportWizard`; this component
//! renders the current step and, on final confirmation, asks the server
//! for a shaped checkout URL and redirects the browser there. No payment
//! details ever touch this site.

use leptos::prelude::*;

use crate::net::api::CheckoutRequest;
use crate::state::support::{SUGGESTED_AMOUNTS_CENTS, SupportStep, SupportWizard};

fn euros(cents: u32) -> String {
    format!("\u{20ac}{}", cents / 100)
}

/// The wizard card on the support page.
#[component]
pub fn SupportWizardCard() -> impl IntoView {
    let wizard = RwSignal::new(SupportWizard::new());
    let checkout_failed = RwSignal::new(false);

    let on_confirm = move |_| {
        checkout_failed.set(false);
        let state = wizard.get_untracked();
        let Some(amount_cents) = state.amount_cents else {
            return;
        };
        let request = CheckoutRequest {
            amount_cents,
            name: state.display_name().to_owned(),
            message: state.message.trim().to_owned(),
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_checkout(&request).await {
                Some(response) => crate::net::api::redirect_to_checkout(&response.checkout_url),
                None => checkout_failed.set(true),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <div class="support-wizard">
            <ol class="support-wizard__steps">
                <li class:is-active=move || wizard.with(|w| w.step == SupportStep::Amount)>
                    "Amount"
                </li>
                <li class:is-active=move || wizard.with(|w| w.step == SupportStep::Details)>
                    "Details"
                </li>
                <li class:is-active=move || wizard.with(|w| w.step == SupportStep::Confirm)>
                    "Confirm"
                </li>
            </ol>

            {move || match wizard.with(|w| w.step) {
                SupportStep::Amount => {
                    view! {
                        <div class="support-wizard__step">
                            <div class="support-wizard__presets">
                                {SUGGESTED_AMOUNTS_CENTS
                                    .iter()
                                    .map(|&cents| {
                                        view! {
                                            <button
                                                class="btn"
                                                class:btn--primary=move || {
                                                    wizard.with(|w| w.amount_cents == Some(cents))
                                                }
                                                on:click=move |_| {
                                                    wizard.update(|w| w.choose_preset(cents));
                                                }
                                            >
                                                {euros(cents)}
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                            <label class="support-wizard__custom">
                                "Or a custom amount (\u{20ac})"
                                <input
                                    type="text"
                                    inputmode="numeric"
                                    prop:value=move || wizard.with(|w| w.custom_amount.clone())
                                    on:input=move |ev| {
                                        wizard.update(|w| w.set_custom_amount(&event_target_value(&ev)));
                                    }
                                />
                            </label>
                        </div>
                    }
                        .into_any()
                }
                SupportStep::Details => {
                    view! {
                        <div class="support-wizard__step">
                            <label class="support-wizard__field">
                                "Name (optional)"
                                <input
                                    type="text"
                                    prop:value=move || wizard.with(|w| w.name.clone())
                                    on:input=move |ev| {
                                        wizard.update(|w| w.name = event_target_value(&ev));
                                    }
                                />
                            </label>
                            <label class="support-wizard__field">
                                "Public message (optional)"
                                <textarea
                                    prop:value=move || wizard.with(|w| w.message.clone())
                                    on:input=move |ev| {
                                        wizard.update(|w| w.message = event_target_value(&ev));
                                    }
                                ></textarea>
                            </label>
                        </div>
                    }
                        .into_any()
                }
                SupportStep::Confirm => {
                    view! {
                        <div class="support-wizard__step">
                            <p>
                                {move || {
                                    wizard
                                        .with(|w| {
                                            format!(
                                                "{} \u{2014} from {}",
                                                w.amount_cents.map(euros).unwrap_or_default(),
                                                w.display_name(),
                                            )
                                        })
                                }}
                            </p>
                            <p class="support-wizard__note">
                                "You'll be taken to a hosted payment page to finish up."
                            </p>
                            <Show when=move || checkout_failed.get()>
                                <p class="support-wizard__error">
                                    "Couldn't reach the checkout service. Please try again."
                                </p>
                            </Show>
                            <button class="btn btn--primary" on:click=on_confirm>
                                "Continue to payment"
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}

            <div class="support-wizard__nav">
                <Show when=move || wizard.with(|w| w.step != SupportStep::Amount)>
                    <button class="btn" on:click=move |_| wizard.update(SupportWizard::back)>
                        "Back"
                    </button>
                </Show>
                <Show when=move || wizard.with(|w| w.step != SupportStep::Confirm)>
                    <button
                        class="btn"
                        disabled=move || !wizard.with(SupportWizard::step_complete)
                        on:click=move |_| {
                            wizard.update(|w| {
                                w.advance();
                            });
                        }
                    >
                        "Next"
                    </button>
                </Show>
            </div>
        </div>
    }
}
