//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the server's JSON endpoints and `types` defines the shared
//! wire schema.

pub mod api;
pub mod types;
