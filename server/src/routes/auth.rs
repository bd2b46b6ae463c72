//! Auth routes: password sign-in, session cookie, current user, logout.
//!
//! The backend access token is kept in an HttpOnly cookie; the browser never
//! sees it. Every authenticated request re-resolves the user through the
//! backend so revoked tokens stop working immediately.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use super::backend_status;
use crate::backend::BackendUser;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "propulse_session";

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    env_bool("COOKIE_SECURE").unwrap_or(false)
}

pub(crate) fn session_cookie(token: String, max_age_secs: Option<i64>, secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build();
    if let Some(secs) = max_age_secs.filter(|s| *s > 0) {
        cookie.set_max_age(Duration::seconds(secs));
    }
    cookie
}

pub(crate) fn cleared_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: BackendUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = app_state.backend.fetch_user(token).await.map_err(|e| {
            if !e.is_unauthorized() {
                tracing::warn!(error = %e, "session user lookup failed");
            }
            backend_status(&e)
        })?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct SignInRequest {
    email: String,
    password: String,
}

/// Trim the email and require both fields.
pub(crate) fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("email and password are required");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// `POST /api/auth/sign-in`: password grant, set session cookie, return user.
pub async fn sign_in(State(state): State<AppState>, jar: CookieJar, Json(body): Json<SignInRequest>) -> Response {
    let (email, password) = match validate_credentials(&body.email, &body.password) {
        Ok(pair) => pair,
        Err(msg) => return (StatusCode::BAD_REQUEST, msg).into_response(),
    };

    let session = match state.backend.sign_in_with_password(&email, &password).await {
        Ok(s) => s,
        Err(e) => {
            if e.is_unauthorized() || matches!(e, crate::backend::BackendError::Response { status: 400, .. }) {
                tracing::info!("sign-in rejected");
                return (StatusCode::UNAUTHORIZED, "invalid credentials").into_response();
            }
            tracing::error!(error = %e, "sign-in failed");
            return (backend_status(&e), "sign-in failed").into_response();
        }
    };

    tracing::info!(user_id = %session.user.id, "user signed in");
    let cookie = session_cookie(session.access_token, session.expires_in, cookie_secure());
    (jar.add(cookie), Json(session.user)).into_response()
}

/// `GET /api/auth/me`: return current user.
pub async fn me(auth: AuthUser) -> Json<BackendUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout`: revoke the token upstream, clear cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(token) = jar.get(COOKIE_NAME).map(|c| c.value().to_owned()) {
        if !token.is_empty() {
            if let Err(e) = state.backend.sign_out(&token).await {
                tracing::warn!(error = %e, "backend sign-out failed");
            }
        }
    }

    (jar.add(cleared_session_cookie(cookie_secure())), StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
