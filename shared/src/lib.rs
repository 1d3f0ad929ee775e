//! Shared types and the soil recommendation engine for AgroSense
//!
//! This crate contains the models and rule engine shared between the
//! backend, the frontend (via WASM), and other components of the system.

pub mod engine;
pub mod models;
pub mod validation;

pub use engine::*;
pub use models::*;
pub use validation::*;
