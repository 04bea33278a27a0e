//! Support ("buy me a coffee") page: wizard plus recent supporters.

use leptos::prelude::*;

use crate::components::support_wizard::SupportWizardCard;
use crate::content::supporters;

/// `/support` — donation wizard and the supporter wall.
#[component]
pub fn SupportPage() -> impl IntoView {
    view! {
        <div class="support-page">
            <h1>"Buy me a coffee"</h1>
            <p>
                "If an article saved you an afternoon, a coffee keeps the next one coming. "
                "Payment happens on a hosted page \u{2014} this site never sees card details."
            </p>
            <SupportWizardCard/>

            <section class="support-page__wall">
                <h2>"Recent supporters"</h2>
                <ul class="support-page__supporters">
                    {supporters::supporters()
                        .into_iter()
                        .map(|supporter| {
                            view! {
                                <li class="supporter">
                                    <span class="supporter__name">{supporter.name}</span>
                                    <span class="supporter__amount">
                                        {format!("\u{20ac}{:.2}", f64::from(supporter.amount_cents) / 100.0)}
                                    </span>
                                    <span class="supporter__date">{supporter.supported_on}</span>
                                    {(!supporter.message.is_empty())
                                        .then(|| {
                                            view! { <p class="supporter__message">{supporter.message}</p> }
                                        })}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </section>
        </div>
    }
}
