//! Top navigation bar with dark mode toggle.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Site-wide navigation. Reads/writes `UiState` from context.
#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle_theme = move |_| {
        ui.update(|state| state.dark_mode = dark_mode::toggle(state.dark_mode));
    };

    let nav_link = |href: &'static str, label: &'static str| {
        view! {
            <a class="nav-bar__link" href=href on:click=move |_| ui.update(UiState::close_nav)>
                {label}
            </a>
        }
    };

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href="/">
                "frida.codes"
            </a>
            <button
                class="nav-bar__burger"
                aria-label="Toggle navigation"
                on:click=move |_| ui.update(UiState::toggle_nav)
            >
                "\u{2630}"
            </button>
            <nav class="nav-bar__links" class:nav-bar__links--open=move || ui.with(|s| s.nav_open)>
                {nav_link("/articles", "Articles")}
                {nav_link("/portfolio", "Portfolio")}
                {nav_link("/workspace", "Workspace")}
                {nav_link("/support", "Buy me a coffee")}
            </nav>
            <button class="nav-bar__theme" aria-label="Toggle dark mode" on:click=on_toggle_theme>
                {move || if ui.with(|s| s.dark_mode) { "\u{2600}" } else { "\u{263e}" }}
            </button>
        </header>
    }
}
