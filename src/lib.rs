//! `ClimateDiff` - decade-scale temperature comparison for any place on earth
//!
//! This library provides the core functionality for resolving place names,
//! fetching historical daily temperatures from Open-Meteo, and comparing
//! the 1970s against the recent 2020-2024 era.

pub mod analyzer;
pub mod api;
pub mod comparator;
pub mod config;
pub mod error;
pub mod models;
pub mod open_meteo;
pub mod resolver;
pub mod web;

// Re-export core types for public API
pub use analyzer::ClimateAnalyzer;
pub use comparator::{ClimateComparator, DailyArchive};
pub use config::ClimateDiffConfig;
pub use error::ClimateDiffError;
pub use models::{ComparisonResult, Location, TemperatureSummary};
pub use open_meteo::OpenMeteoClient;
pub use resolver::{GeocodingProvider, LocationResolver};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, ClimateDiffError>;
