//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{auth::AuthPage, dashboard::DashboardPage, landing::LandingPage};
use crate::state::{applications::ApplicationsState, auth::AuthState};
use crate::util::auth::load_current_user;
use crate::util::theme::provide_theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr" data-theme="light">
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
/// Provides the shared auth, applications and theme contexts and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let applications = RwSignal::new(ApplicationsState::default());
    provide_context(auth);
    provide_context(applications);
    provide_theme();

    load_current_user(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/propulse.css"/>
        <Title text="Propulse"/>

        <Router>
            <Routes fallback=|| "Page introuvable.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
