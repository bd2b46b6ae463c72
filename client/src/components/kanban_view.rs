//! Dashboard entry point for the application board.

use leptos::prelude::*;

use super::kanban_board::KanbanBoard;
use crate::net::types::Application;

/// List handed to the board: absent input is an empty board, anything else
/// passes through untouched.
pub fn board_applications(initial: Option<Vec<Application>>) -> Vec<Application> {
    initial.unwrap_or_default()
}

#[component]
pub fn KanbanView(
    #[prop(optional)] initial_applications: Option<Vec<Application>>,
    #[prop(optional)] on_change: Option<Callback<Vec<Application>>>,
) -> impl IntoView {
    view! { <KanbanBoard applications=board_applications(initial_applications) on_change=on_change /> }
}

#[cfg(test)]
#[path = "kanban_view_test.rs"]
mod tests;
