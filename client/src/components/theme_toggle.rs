//! Light/dark switch shared by the landing and dashboard headers.

use leptos::prelude::*;

use crate::state::theme::Theme;
use crate::util::theme::use_theme;

/// Glyph for the button: shows the theme a click switches to.
pub fn toggle_glyph(theme: Theme) -> &'static str {
    if theme.is_dark() { "☀" } else { "☾" }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    let current = theme.signal();

    view! {
        <button
            class="btn theme-toggle"
            type="button"
            on:click=move |_| {
                theme.toggle();
            }
            title="Changer de thème"
            aria-label="Changer de thème"
        >
            {move || toggle_glyph(current.get())}
        </button>
    }
}

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod tests;
