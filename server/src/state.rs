//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the one backend client built at startup; every handler reaches
//! the hosted backend through it.

use std::sync::Arc;

use crate::backend::BackendClient;

/// Shared application state, injected into Axum handlers via State extractor.
/// The client is `Arc`-wrapped so clones share one connection pool.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<BackendClient>,
}

impl AppState {
    #[must_use]
    pub fn new(backend: BackendClient) -> Self {
        Self { backend: Arc::new(backend) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::backend::BackendConfig;

    /// Create a test `AppState` pointing at an unroutable backend (no network use).
    #[must_use]
    pub fn test_app_state() -> AppState {
        let config = BackendConfig { url: "http://127.0.0.1:9".to_owned(), anon_key: "test-anon-key".to_owned() };
        AppState::new(BackendClient::new(config).expect("client build should not fail"))
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
