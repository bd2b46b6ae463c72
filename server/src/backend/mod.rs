//! Backend: hosted auth/database service integration.
//!
//! DESIGN
//! ======
//! `BackendConfig` is validated once at startup; `BackendClient` is built from
//! it and handed to the router through `AppState`. Nothing here is global.

pub mod client;
pub mod config;
pub mod types;

pub use client::BackendClient;
pub use config::BackendConfig;
pub use types::{BackendError, BackendUser};

