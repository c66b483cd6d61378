//! Shared types and models for the Weather Gateway
//!
//! This crate contains the provider data shapes, the reshaped snapshots returned
//! to callers, request bodies, and the validation helpers used by the backend.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
