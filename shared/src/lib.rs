//! Shared types and models for the Agri Dashboard Platform
//!
//! This crate contains the types shared between the backend and the
//! dashboard front end: domain enumerations and JSON wire models.

pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
