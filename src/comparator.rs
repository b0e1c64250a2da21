//! Orchestration of the two-era climate comparison
//!
//! Fetches the historical and recent daily temperature ranges, reduces each
//! to a summary, and assembles the comparison. The two fetches carry no data
//! dependency and run concurrently; a failure on either side collapses to
//! "no summary" for that side only, so the other era's data is still used.

use crate::Result;
use crate::analyzer::ClimateAnalyzer;
use crate::models::{ComparisonResult, TemperatureSummary};
use crate::open_meteo::{DailyTemperatureResponse, OpenMeteoClient};
use tracing::{debug, warn};

/// The baseline era, inclusive year range
const HISTORICAL_PERIOD: (i32, i32) = (1970, 1979);
/// The recent era, inclusive year range
const RECENT_PERIOD: (i32, i32) = (2020, 2024);

/// Source of daily temperature archives for a coordinate and year range
pub trait DailyArchive {
    async fn fetch_daily_temperatures(
        &self,
        latitude: f64,
        longitude: f64,
        start_year: i32,
        end_year: i32,
    ) -> Result<DailyTemperatureResponse>;
}

impl DailyArchive for OpenMeteoClient {
    async fn fetch_daily_temperatures(
        &self,
        latitude: f64,
        longitude: f64,
        start_year: i32,
        end_year: i32,
    ) -> Result<DailyTemperatureResponse> {
        OpenMeteoClient::fetch_daily_temperatures(self, latitude, longitude, start_year, end_year)
            .await
    }
}

/// Service comparing the two temperature eras for a coordinate
#[derive(Debug, Clone)]
pub struct ClimateComparator<A> {
    archive: A,
}

impl<A: DailyArchive> ClimateComparator<A> {
    pub fn new(archive: A) -> Self {
        Self { archive }
    }

    /// Compare the historical and recent eras at the given coordinates.
    ///
    /// Always produces a result; eras whose fetch or reduction came up empty
    /// are reported as absent summaries with `has_data = false`.
    pub async fn compare(
        &self,
        latitude: f64,
        longitude: f64,
        location_name: &str,
    ) -> ComparisonResult {
        debug!(
            "Comparing climate for {} at ({}, {})",
            location_name, latitude, longitude
        );

        let (historical, recent) = tokio::join!(
            self.summarize_period(latitude, longitude, HISTORICAL_PERIOD),
            self.summarize_period(latitude, longitude, RECENT_PERIOD),
        );

        ComparisonResult::new(location_name, historical, recent)
    }

    /// Fetch and reduce one era; upstream failure collapses to `None` here
    async fn summarize_period(
        &self,
        latitude: f64,
        longitude: f64,
        (start_year, end_year): (i32, i32),
    ) -> Option<TemperatureSummary> {
        let response = match self
            .archive
            .fetch_daily_temperatures(latitude, longitude, start_year, end_year)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(
                    "Fetching {}-{} daily temperatures failed: {}",
                    start_year, end_year, e
                );
                return None;
            }
        };

        ClimateAnalyzer::summarize(&response)
    }
}
