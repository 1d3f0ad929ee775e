//! HTTP handlers for the AgroSense API

pub mod analysis;
pub mod health;

pub use analysis::*;
pub use health::*;
