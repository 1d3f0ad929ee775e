//! Domain models for the AgroSense platform

mod recommendation;
mod soil;

pub use recommendation::*;
pub use soil::*;
