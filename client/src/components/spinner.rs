//! Loading indicator shown while dashboard data is in flight.

use leptos::prelude::*;

pub const DEFAULT_SIZE: u32 = 24;

/// Inline size style for a square spinner of `size` pixels.
pub fn spinner_style(size: u32) -> String {
    format!("width: {size}px; height: {size}px;")
}

/// Base class plus any caller-supplied extra classes.
pub fn spinner_class(extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("spinner {extra}"),
        _ => "spinner".to_owned(),
    }
}

#[component]
pub fn Spinner(
    #[prop(default = DEFAULT_SIZE)] size: u32,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    view! {
        <span
            class=spinner_class(class.as_deref())
            style=spinner_style(size)
            role="status"
            aria-label="Chargement"
        ></span>
    }
}

#[cfg(test)]
#[path = "spinner_test.rs"]
mod tests;
