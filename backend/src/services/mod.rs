//! Business logic services for the AgroSense server

pub mod analysis;

pub use analysis::{Analysis, AnalysisService};
