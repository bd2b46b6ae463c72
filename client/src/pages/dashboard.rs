//! Authenticated board of the user's job applications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards on the auth context, loads `/api/applications` once the user is
//! known, and hands the rows to the kanban view. Moves made on the board are
//! mirrored back into `ApplicationsState` so the daily-actions count follows.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::daily_actions_header::DailyActionsHeader;
use crate::components::footer::BRAND;
use crate::components::kanban_view::KanbanView;
use crate::components::spinner::Spinner;
use crate::components::theme_toggle::ThemeToggle;
use crate::net::types::Application;
use crate::state::applications::{ApplicationsState, pending_action_count};
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Name shown in the toolbar for the signed-in user.
pub fn user_label(auth: &AuthState) -> String {
    auth.user
        .as_ref()
        .map(|user| user.email.clone().unwrap_or_else(|| user.id.clone()))
        .unwrap_or_default()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let apps = expect_context::<RwSignal<ApplicationsState>>();
    install_unauth_redirect(auth, use_navigate());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() || auth.with(|a| a.user.is_none()) {
            return;
        }
        requested.set(true);
        load_applications(apps);
    });

    let loading = Memo::new(move |_| apps.with(|s| s.loading));
    let error = Memo::new(move |_| apps.with(|s| s.error.clone()));
    let pending = Memo::new(move |_| apps.with(|s| pending_action_count(&s.items)));
    let on_board_change = Callback::new(move |items: Vec<Application>| apps.update(|s| s.items = items));

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                apps.set(ApplicationsState::default());
                auth.update(|a| a.user = None);
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href(crate::util::auth::AUTH_PATH);
                }
            });
        }
    };

    view! {
        <Show
            when=move || auth.with(|a| !a.loading && a.user.is_some())
            fallback=move || {
                view! {
                    <div class="dashboard-page dashboard-page--pending">
                        <Spinner size=32/>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header toolbar">
                    <a class="toolbar__brand" href="/">{BRAND}</a>
                    <span class="toolbar__spacer"></span>
                    <ThemeToggle/>
                    <span class="toolbar__self">{move || auth.with(user_label)}</span>
                    <button class="btn toolbar__logout" on:click=on_logout title="Se déconnecter">
                        "Déconnexion"
                    </button>
                </header>

                <main class="dashboard-page__body">
                    <DailyActionsHeader count=pending/>
                    <Show when=move || error.get().is_some()>
                        <p class="dashboard-page__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <Spinner class="dashboard-page__spinner"/> }
                    >
                        {move || {
                            let items = apps.with_untracked(|s| s.items.clone());
                            view! { <KanbanView initial_applications=items on_change=on_board_change/> }
                        }}
                    </Show>
                </main>
            </div>
        </Show>
    }
}

fn load_applications(apps: RwSignal<ApplicationsState>) {
    apps.update(|s| {
        s.loading = true;
        s.error = None;
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_applications().await;
        apps.update(|s| {
            s.loading = false;
            match result {
                Ok(items) => s.items = items,
                Err(e) => {
                    log::warn!("loading applications failed: {e}");
                    s.error = Some(e);
                }
            }
        });
    });
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
