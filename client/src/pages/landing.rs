//! Public marketing page.
//!
//! Sections render in a fixed order: header, hero, feature grid, call to
//! action, footer.

use leptos::prelude::*;

use crate::components::feature_card::FeatureCard;
use crate::components::footer::{BRAND, Footer};
use crate::components::theme_toggle::ThemeToggle;
use crate::state::auth::AuthState;
use crate::util::auth::{AUTH_PATH, DASHBOARD_PATH};

/// Landing feature tiles: `(icon, title, description)`.
pub const FEATURES: [(&str, &str, &str); 3] = [
    (
        "🎯",
        "Suivi des candidatures",
        "Centralisez chaque offre et voyez d'un coup d'œil où en est votre recherche.",
    ),
    (
        "🗂",
        "Tableau kanban",
        "Faites avancer vos candidatures d'une colonne à l'autre, de l'envoi jusqu'à l'offre.",
    ),
    (
        "⚡",
        "Actions du jour",
        "Sachez chaque matin combien de candidatures attendent encore votre envoi.",
    ),
];

/// Where the primary buttons lead and what they say for the current session.
pub fn primary_cta(auth: &AuthState) -> (&'static str, &'static str) {
    if auth.user.is_some() {
        (DASHBOARD_PATH, "Ouvrir mon tableau de bord")
    } else {
        (AUTH_PATH, "Commencer gratuitement")
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cta = Memo::new(move |_| auth.with(primary_cta));

    view! {
        <div class="landing-page">
            <header class="landing-header">
                <a class="landing-header__brand" href="/">{BRAND}</a>
                <span class="landing-header__spacer"></span>
                <ThemeToggle/>
                <a class="btn landing-header__signin" href=AUTH_PATH>"Se connecter"</a>
            </header>

            <section class="landing-hero">
                <h1 class="landing-hero__title">"Propulsez votre recherche d'emploi"</h1>
                <p class="landing-hero__subtitle">
                    "Organisez vos candidatures, suivez vos relances et gardez le cap jusqu'à l'offre."
                </p>
                <a class="btn btn--primary landing-hero__cta" href=move || cta.get().0>
                    {move || cta.get().1}
                </a>
            </section>

            <section class="landing-features">
                {FEATURES
                    .into_iter()
                    .map(|(icon, title, description)| {
                        view! { <FeatureCard icon=icon title=title description=description/> }
                    })
                    .collect_view()}
            </section>

            <section class="landing-cta">
                <h2 class="landing-cta__title">"Prêt à passer à la vitesse supérieure ?"</h2>
                <a class="btn btn--primary landing-cta__button" href=move || cta.get().0>
                    {move || cta.get().1}
                </a>
            </section>

            <Footer/>
        </div>
    }
}

#[cfg(test)]
#[path = "landing_test.rs"]
mod tests;
