//! Backend types: errors and auth wire payloads.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERRORS
// =============================================================================

/// Startup configuration failures. Fatal: the server refuses to boot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendConfigError {
    /// A required environment variable is not set.
    #[error("missing backend configuration: env var {var} not set")]
    Missing { var: String },

    /// A required environment variable is set but blank.
    #[error("invalid backend configuration: env var {var} is empty")]
    Empty { var: String },
}

/// Errors produced by backend client operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request to the backend failed before a response arrived.
    #[error("backend request failed: {0}")]
    Request(String),

    /// The backend returned a non-success HTTP status.
    #[error("backend response error: status {status}")]
    Response { status: u16, body: String },

    /// The backend response body could not be deserialized.
    #[error("backend response parse failed: {0}")]
    Parse(String),
}

impl BackendError {
    /// Whether the backend rejected the caller's credentials.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Response { status: 401 | 403, .. })
    }
}

// =============================================================================
// AUTH PAYLOADS
// =============================================================================

/// Authenticated user as returned by `/auth/v1/user` and the token grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Session returned by the password grant.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    pub user: BackendUser,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

#[derive(Serialize)]
pub(super) struct PasswordGrant<'a> {
    pub email: &'a str,
    pub password: &'a str,
}
