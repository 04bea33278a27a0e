//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    article::ArticlePage, articles::ArticlesPage, home::HomePage, portfolio::PortfolioPage,
    support::SupportPage, workspace::WorkspaceIndexPage, workspace::WorkspacePage,
};
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared UI state context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Pick up the stored theme preference once the page is live.
    Effect::new(move || {
        let enabled = dark_mode::read_preference();
        dark_mode::apply(enabled);
        ui.update(|state| state.dark_mode = enabled);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/devfolio.css"/>
        <Title text="frida.codes"/>

        <Router>
            <NavBar/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("articles") view=ArticlesPage/>
                    <Route path=(StaticSegment("articles"), ParamSegment("slug")) view=ArticlePage/>
                    <Route path=StaticSegment("portfolio") view=PortfolioPage/>
                    <Route path=StaticSegment("support") view=SupportPage/>
                    <Route path=StaticSegment("workspace") view=WorkspaceIndexPage/>
                    <Route path=(StaticSegment("workspace"), ParamSegment("slug")) view=WorkspacePage/>
                </Routes>
            </main>
        </Router>
    }
}
