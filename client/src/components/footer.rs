//! Site footer with brand and copyright line.

use leptos::prelude::*;

pub const BRAND: &str = "Propulse";
pub const COPYRIGHT_YEAR: u16 = 2025;

pub fn copyright_line() -> String {
    format!("© {COPYRIGHT_YEAR} {BRAND}. Tous droits réservés.")
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <span class="site-footer__brand">{BRAND}</span>
            <span class="site-footer__copyright">{copyright_line()}</span>
        </footer>
    }
}

#[cfg(test)]
#[path = "footer_test.rs"]
mod tests;
