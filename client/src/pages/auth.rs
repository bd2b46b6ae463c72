//! Email + password sign-in page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_header::AuthHeader;
use crate::state::auth::AuthState;
use crate::util::auth::DASHBOARD_PATH;

pub const MISSING_FIELDS_MESSAGE: &str = "Renseignez votre email et votre mot de passe.";

/// Trim the email and require both fields.
///
/// The password is sent exactly as typed; a blank one counts as missing.
pub fn validate_sign_in_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: skip the form.
    let navigate_signed_in = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_some() {
            navigate_signed_in(DASHBOARD_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_sign_in_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Connexion...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_in(&email_value, &password_value).await {
                    Ok(user) => {
                        info.set(String::new());
                        auth.set(AuthState { user: Some(user), loading: false });
                        navigate(DASHBOARD_PATH, NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(e);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <AuthHeader/>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            autocomplete="email"
                            placeholder="vous@exemple.fr"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Mot de passe"
                        <input
                            class="auth-input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary auth-button" type="submit" disabled=move || busy.get()>
                        "Se connecter"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
