//! Status-column board for job applications.
//!
//! DESIGN
//! ======
//! The board owns a local copy of the records it was given. Moves are applied
//! to that copy first and then persisted; a failed save puts the record back
//! in the column it came from.

use leptos::prelude::*;

use crate::net::types::{Application, ApplicationStatus};
use crate::state::applications::{MoveDirection, group_by_status, move_application};
#[cfg(feature = "hydrate")]
use crate::state::applications::restore_status;

/// Heading for a card; records without a company still get one.
pub fn card_title(app: &Application) -> String {
    app.company().unwrap_or("Entreprise non renseignée").to_owned()
}

#[component]
pub fn KanbanBoard(
    applications: Vec<Application>,
    #[prop(default = None)] on_change: Option<Callback<Vec<Application>>>,
) -> impl IntoView {
    let items = RwSignal::new(applications);

    let publish = move || {
        if let Some(on_change) = on_change {
            on_change.run(items.get_untracked());
        }
    };

    let on_move = Callback::new(move |(index, direction): (usize, MoveDirection)| {
        let mut moved = None;
        let mut id = None;
        items.update(|list| {
            moved = move_application(list, index, direction);
            id = list.get(index).and_then(Application::id);
        });
        let Some((from, to)) = moved else {
            return;
        };
        publish();

        #[cfg(feature = "hydrate")]
        {
            let Some(id) = id else {
                log::warn!("application at {index} has no id; move kept locally");
                return;
            };
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::update_application_status(&id, to).await {
                    log::warn!("status update for {id} to {to} failed: {e}");
                    items.update(|list| {
                        restore_status(list, &id, to, from);
                    });
                    publish();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, from, to);
        }
    });

    view! {
        <div class="kanban">
            {move || {
                items
                    .with(|list| {
                        group_by_status(list)
                            .into_iter()
                            .map(|column| {
                                let status = column.status;
                                let count = column.indices.len();
                                let cards = column
                                    .indices
                                    .into_iter()
                                    .map(|i| card(i, list[i].clone(), status, on_move))
                                    .collect_view();
                                view! {
                                    <section class="kanban__column" data-status=status.as_str()>
                                        <header class="kanban__column-header">
                                            <span class="kanban__column-title">{status.label()}</span>
                                            <span class="kanban__count">{count}</span>
                                        </header>
                                        <div class="kanban__cards">{cards}</div>
                                    </section>
                                }
                            })
                            .collect_view()
                    })
            }}
        </div>
    }
}

fn card(
    index: usize,
    app: Application,
    status: ApplicationStatus,
    on_move: Callback<(usize, MoveDirection)>,
) -> impl IntoView {
    let title = card_title(&app);
    let position = app.position().unwrap_or_default().to_owned();
    let location = app.location().map(str::to_owned);
    let at_first = status.previous().is_none();
    let at_last = status.next().is_none();

    view! {
        <article class="kanban-card">
            <h4 class="kanban-card__company">{title}</h4>
            <p class="kanban-card__position">{position}</p>
            {location.map(|loc| view! { <p class="kanban-card__location">{loc}</p> })}
            <div class="kanban-card__actions">
                <button
                    class="btn kanban-card__move"
                    type="button"
                    disabled=at_first
                    on:click=move |_| on_move.run((index, MoveDirection::Left))
                    title="Colonne précédente"
                    aria-label="Colonne précédente"
                >
                    "←"
                </button>
                <button
                    class="btn kanban-card__move"
                    type="button"
                    disabled=at_last
                    on:click=move |_| on_move.run((index, MoveDirection::Right))
                    title="Colonne suivante"
                    aria-label="Colonne suivante"
                >
                    "→"
                </button>
            </div>
        </article>
    }
}

#[cfg(test)]
#[path = "kanban_board_test.rs"]
mod tests;
