//! Backend REST client.
//!
//! Thin HTTP wrapper over the hosted backend's auth (`/auth/v1`) and table
//! (`/rest/v1`) endpoints. URL building and body parsing are free functions
//! so they can be tested without a network.

use std::marker::PhantomData;
use std::time::Duration;

use serde::de::DeserializeOwned;

use super::config::BackendConfig;
use super::types::{AuthSession, BackendError, BackendUser, PasswordGrant};

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// SCHEMA
// =============================================================================

/// Database schema a client is bound to.
///
/// Sent as `Accept-Profile` on reads and `Content-Profile` on writes.
pub trait Schema: Send + Sync + 'static {
    const NAME: &'static str;
}

/// The default `public` schema.
pub struct PublicSchema;

impl Schema for PublicSchema {
    const NAME: &'static str = "public";
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct BackendClient<S: Schema = PublicSchema> {
    http: reqwest::Client,
    config: BackendConfig,
    _schema: PhantomData<fn() -> S>,
}

impl<S: Schema> BackendClient<S> {
    /// Build a client from validated credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| BackendError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config, _schema: PhantomData })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.config.url
    }

    #[must_use]
    pub fn schema(&self) -> &'static str {
        S::NAME
    }

    /// Exchange email + password for a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, credentials are rejected, or the
    /// session payload cannot be parsed.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthSession, BackendError> {
        let response = self
            .http
            .post(auth_url(&self.config.url, "token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.config.anon_key)
            .json(&PasswordGrant { email, password })
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let text = read_success(response).await?;
        parse_json(&text)
    }

    /// Resolve the user owning an access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the token is rejected.
    pub async fn fetch_user(&self, token: &str) -> Result<BackendUser, BackendError> {
        let response = self
            .http
            .get(auth_url(&self.config.url, "user"))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let text = read_success(response).await?;
        parse_json(&text)
    }

    /// Revoke an access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn sign_out(&self, token: &str) -> Result<(), BackendError> {
        let response = self
            .http
            .post(auth_url(&self.config.url, "logout"))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        read_success(response).await.map(|_| ())
    }

    /// Read every visible row of `table`.
    ///
    /// Row visibility is decided by the backend's row-level security for the
    /// given access token, or for the anon role when `token` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, is rejected, or rows cannot be decoded.
    pub async fn select<T: DeserializeOwned>(&self, table: &str, token: Option<&str>) -> Result<Vec<T>, BackendError> {
        let response = self
            .http
            .get(rest_url(&self.config.url, table))
            .query(&[("select", "*")])
            .header("apikey", &self.config.anon_key)
            .header("Accept-Profile", S::NAME)
            .bearer_auth(bearer(token, &self.config.anon_key))
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let text = read_success(response).await?;
        parse_json(&text)
    }

    /// Apply a partial update to the row of `table` whose `id` equals `id`.
    ///
    /// Returns the updated rows; an empty vec means no visible row matched.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, is rejected, or rows cannot be decoded.
    pub async fn update_by_id<T: DeserializeOwned>(
        &self,
        table: &str,
        id: &str,
        patch: &serde_json::Value,
        token: Option<&str>,
    ) -> Result<Vec<T>, BackendError> {
        let response = self
            .http
            .patch(rest_url(&self.config.url, table))
            .query(&[("id", id_filter(id))])
            .header("apikey", &self.config.anon_key)
            .header("Content-Profile", S::NAME)
            .header("Prefer", "return=representation")
            .bearer_auth(bearer(token, &self.config.anon_key))
            .json(patch)
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let text = read_success(response).await?;
        parse_json(&text)
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn auth_url(base: &str, path: &str) -> String {
    format!("{base}/auth/v1/{path}")
}

fn rest_url(base: &str, table: &str) -> String {
    format!("{base}/rest/v1/{table}")
}

fn id_filter(id: &str) -> String {
    format!("eq.{id}")
}

/// User token when present, else the anon key.
fn bearer<'a>(token: Option<&'a str>, anon_key: &'a str) -> &'a str {
    token.filter(|t| !t.is_empty()).unwrap_or(anon_key)
}

async fn read_success(response: reqwest::Response) -> Result<String, BackendError> {
    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| BackendError::Request(e.to_string()))?;

    if !(200..300).contains(&status) {
        return Err(BackendError::Response { status, body: text });
    }
    Ok(text)
}

fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, BackendError> {
    serde_json::from_str(text).map_err(|e| BackendError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
