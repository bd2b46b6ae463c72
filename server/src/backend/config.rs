//! Backend credentials parsed from environment variables.
//!
//! DESIGN
//! ======
//! The credentials pair is validated exactly once, in `main`, before any
//! client is built. Validation is expressed over a lookup function so tests
//! never have to touch the process environment.

use super::types::BackendConfigError;

pub const URL_VAR: &str = "SUPABASE_URL";
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

#[derive(Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Project base URL without a trailing slash.
    pub url: String,
    /// Public (anon) API key sent with every request.
    pub anon_key: String,
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("url", &self.url)
            .field("anon_key", &"<redacted>")
            .finish()
    }
}

impl BackendConfig {
    /// Build the backend config from environment variables.
    ///
    /// Required:
    /// - `SUPABASE_URL`
    /// - `SUPABASE_ANON_KEY`
    ///
    /// # Errors
    ///
    /// Returns an error naming the first variable that is unset or blank.
    pub fn from_env() -> Result<Self, BackendConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the backend config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first variable that is unset or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BackendConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = required(&lookup, URL_VAR)?;
        let anon_key = required(&lookup, ANON_KEY_VAR)?;
        Ok(Self { url: url.trim_end_matches('/').to_owned(), anon_key })
    }
}

fn required<F>(lookup: &F, var: &str) -> Result<String, BackendConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(var).ok_or_else(|| BackendConfigError::Missing { var: var.to_owned() })?;
    let value = raw.trim();
    if value.is_empty() {
        return Err(BackendConfigError::Empty { var: var.to_owned() });
    }
    Ok(value.to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
