//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `applications`, `theme`) so individual
//! components can depend on small focused models.

pub mod applications;
pub mod auth;
pub mod theme;
