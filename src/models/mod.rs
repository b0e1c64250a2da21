//! Data models for the ClimateDiff application
//!
//! This module contains the core domain models organized by concern:
//! - Location: Geographic coordinates and metadata
//! - Climate: Temperature summaries and era comparisons

pub mod climate;
pub mod location;

// Re-export all public types for convenient access
pub use climate::{ComparisonResult, TemperatureSummary};
pub use location::Location;
