//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::rate_limit_snackbar::RateLimitSnackbar;
use crate::config::APP_NAME;
use crate::pages::control_assessment::{AiControlPage, CyberControlPage};
use crate::pages::home::HomePage;
use crate::pages::inventory::InventoryPage;
use crate::pages::login::LoginPage;
use crate::pages::project::ProjectPage;
use crate::pages::questionnaire::QuestionnairePage;
use crate::pages::risk_dashboard::{AiRiskPage, CyberRiskPage};
use crate::pages::templates::TemplatesPage;
use crate::state::rate_limit::RateLimitState;

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
/// Provides the session and rate-limit contexts and sets up client-side
/// routing. The session is restored from local storage before the first
/// render so protected pages can redirect immediately.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(crate::state::session::load_persisted());
    let rate_limit = RwSignal::new(RateLimitState::default());

    provide_context(session);
    provide_context(rate_limit);

    view! {
        <Stylesheet id="leptos" href="/pkg/grc-console.css"/>
        <Title text=APP_NAME/>

        <Router>
            <NavBar/>
            <RateLimitSnackbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("questionnaire") view=QuestionnairePage/>
                    <Route
                        path=(StaticSegment("risks"), StaticSegment("ai"))
                        view=AiRiskPage
                    />
                    <Route
                        path=(StaticSegment("risks"), StaticSegment("cyber"))
                        view=CyberRiskPage
                    />
                    <Route
                        path=(StaticSegment("controls"), StaticSegment("ai"))
                        view=AiControlPage
                    />
                    <Route
                        path=(StaticSegment("controls"), StaticSegment("cyber"))
                        view=CyberControlPage
                    />
                    <Route path=StaticSegment("templates") view=TemplatesPage/>
                    <Route path=StaticSegment("inventory") view=InventoryPage/>
                    <Route
                        path=(StaticSegment("project"), ParamSegment("id"))
                        view=ProjectPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
