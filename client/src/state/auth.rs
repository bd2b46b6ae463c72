//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// `loading` starts `true` and flips once `/api/auth/me` has answered, so
/// guards do not redirect before the session is known.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// True once the session is known to be absent.
    #[must_use]
    pub fn should_redirect_unauth(&self) -> bool {
        !self.loading && self.user.is_none()
    }
}
