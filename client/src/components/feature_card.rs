//! Marketing feature tile used by the landing page grid.

use leptos::prelude::*;

#[component]
pub fn FeatureCard(
    #[prop(into)] icon: String,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
) -> impl IntoView {
    view! {
        <article class="feature-card">
            <span class="feature-card__icon" aria-hidden="true">{icon}</span>
            <h3 class="feature-card__title">{title}</h3>
            <p class="feature-card__description">{description}</p>
        </article>
    }
}
