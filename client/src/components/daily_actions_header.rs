//! Dashboard heading announcing how many applications still need action.

use leptos::prelude::*;

/// `"{count} action{s} à traiter"`; plural only above one.
pub fn daily_actions_label(count: usize) -> String {
    let suffix = if count > 1 { "s" } else { "" };
    format!("{count} action{suffix} à traiter")
}

#[component]
pub fn DailyActionsHeader(#[prop(into)] count: Signal<usize>) -> impl IntoView {
    view! {
        <div class="daily-actions">
            <h2 class="daily-actions__title">"Aujourd'hui"</h2>
            <p class="daily-actions__count">{move || daily_actions_label(count.get())}</p>
        </div>
    }
}

#[cfg(test)]
#[path = "daily_actions_header_test.rs"]
mod tests;
