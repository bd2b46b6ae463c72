//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const AUTH_PATH: &str = "/auth";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Redirect to the auth page whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.get().should_redirect_unauth() {
            navigate(AUTH_PATH, NavigateOptions::default());
        }
    });
}

/// Load the session user once, in the browser, and settle `loading`.
pub fn load_current_user(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        auth.set(AuthState { user, loading: false });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}
