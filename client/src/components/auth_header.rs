//! Brand mark and tagline shown above the sign-in form.

use leptos::prelude::*;

use super::footer::BRAND;

#[component]
pub fn AuthHeader() -> impl IntoView {
    view! {
        <header class="auth-header">
            <a class="auth-header__brand" href="/">{BRAND}</a>
            <p class="auth-header__tagline">"Pilotez votre recherche d'emploi, une action à la fois."</p>
        </header>
    }
}
