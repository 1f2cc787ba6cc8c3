//! Database and wire models for the Agri Dashboard Platform
//!
//! Re-exports models from the shared crate; per-entity row types live with
//! the services that query them.

pub use shared::models::*;
pub use shared::types::*;
