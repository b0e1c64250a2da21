//! Open-Meteo API client
//!
//! HTTP client functionality for the two Open-Meteo services this application
//! depends on: the geocoding search endpoint and the historical weather
//! archive. Both are public, key-free APIs. Errors stay typed here so callers
//! can tell "no matches" apart from "service unavailable"; collapsing a
//! failure into an empty result is the caller's decision.

use crate::config::ClimateDiffConfig;
use crate::models::Location;
use crate::{ClimateDiffError, Result};
use anyhow::Context;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

/// Maximum number of geocoding matches requested per search
const GEOCODING_RESULT_COUNT: u8 = 5;

/// Client for the Open-Meteo geocoding and archive APIs
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: reqwest::Client,
    geocoding_url: String,
    geocoding_timeout: Duration,
    archive_url: String,
    archive_timeout: Duration,
}

impl OpenMeteoClient {
    /// Create a new client from application configuration
    pub fn new(config: &ClimateDiffConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("climatediff/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            geocoding_url: config.geocoding.base_url.clone(),
            geocoding_timeout: Duration::from_secs(config.geocoding.timeout_seconds),
            archive_url: config.archive.base_url.clone(),
            archive_timeout: Duration::from_secs(config.archive.timeout_seconds),
        })
    }

    /// Search for locations matching a free-text query.
    ///
    /// Returns up to five matches in the upstream relevance order.
    #[instrument(skip(self))]
    pub async fn search_locations(&self, query: &str) -> Result<Vec<Location>> {
        let url = format!(
            "{}?name={}&count={}&language=en&format=json",
            self.geocoding_url,
            urlencoding::encode(query),
            GEOCODING_RESULT_COUNT
        );

        debug!("Geocoding request URL: {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.geocoding_timeout)
            .send()
            .await
            .map_err(|e| ClimateDiffError::upstream(format!("geocoding request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClimateDiffError::upstream(format!(
                "geocoding request returned HTTP {status}"
            )));
        }

        let geocoding: GeocodingResponse = response
            .json()
            .await
            .map_err(|e| ClimateDiffError::upstream(format!("invalid geocoding response: {e}")))?;

        let locations: Vec<Location> = geocoding
            .results
            .unwrap_or_default()
            .into_iter()
            .map(Location::from)
            .collect();

        debug!("Found {} geocoding results for '{}'", locations.len(), query);
        Ok(locations)
    }

    /// Fetch daily max/min/mean temperatures for an inclusive year range.
    #[instrument(skip(self))]
    pub async fn fetch_daily_temperatures(
        &self,
        latitude: f64,
        longitude: f64,
        start_year: i32,
        end_year: i32,
    ) -> Result<DailyTemperatureResponse> {
        let url = archive_request_url(&self.archive_url, latitude, longitude, start_year, end_year);

        debug!("Archive request URL: {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.archive_timeout)
            .send()
            .await
            .map_err(|e| ClimateDiffError::upstream(format!("archive request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClimateDiffError::upstream(format!(
                "archive request returned HTTP {status}"
            )));
        }

        let data: DailyTemperatureResponse = response
            .json()
            .await
            .map_err(|e| ClimateDiffError::upstream(format!("invalid archive response: {e}")))?;

        Ok(data)
    }
}

/// Build the archive query URL for an inclusive year range
fn archive_request_url(
    base_url: &str,
    latitude: f64,
    longitude: f64,
    start_year: i32,
    end_year: i32,
) -> String {
    format!(
        "{base_url}?latitude={latitude}&longitude={longitude}\
         &start_date={start_year}-01-01&end_date={end_year}-12-31\
         &daily=temperature_2m_max,temperature_2m_min,temperature_2m_mean\
         &timezone=auto"
    )
}

/// Geocoding response from Open-Meteo; `results` is absent when there are
/// no matches
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
}

impl From<GeocodingResult> for Location {
    fn from(result: GeocodingResult) -> Self {
        Location::new(
            result.name,
            result.country.unwrap_or_default(),
            result.latitude,
            result.longitude,
        )
    }
}

/// Daily temperature response from the archive endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyTemperatureResponse {
    pub daily: Option<DailySeries>,
}

/// Parallel per-day temperature arrays covering a contiguous date range.
/// Entries are null where the reanalysis has no reading for that day, and
/// whole arrays may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailySeries {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Option<Vec<Option<f64>>>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Option<Vec<Option<f64>>>,
    #[serde(rename = "temperature_2m_mean")]
    pub temperature_mean: Option<Vec<Option<f64>>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_request_url() {
        let url = archive_request_url(
            "https://archive-api.open-meteo.com/v1/archive",
            51.5074,
            -0.1278,
            1970,
            1979,
        );
        assert!(url.starts_with("https://archive-api.open-meteo.com/v1/archive?"));
        assert!(url.contains("latitude=51.5074"));
        assert!(url.contains("longitude=-0.1278"));
        assert!(url.contains("start_date=1970-01-01"));
        assert!(url.contains("end_date=1979-12-31"));
        assert!(url.contains("daily=temperature_2m_max,temperature_2m_min,temperature_2m_mean"));
        assert!(url.contains("timezone=auto"));
    }

    #[test]
    fn test_geocoding_result_to_location() {
        let result = GeocodingResult {
            name: "London".to_string(),
            latitude: 51.5074,
            longitude: -0.1278,
            country: Some("United Kingdom".to_string()),
        };

        let location: Location = result.into();
        assert_eq!(location.name, "London");
        assert_eq!(location.country, "United Kingdom");
        assert_eq!(location.display_name, "London, United Kingdom");
        assert_eq!(location.latitude, 51.5074);
        assert_eq!(location.longitude, -0.1278);
    }

    #[test]
    fn test_geocoding_result_without_country() {
        let result = GeocodingResult {
            name: "Null Island".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            country: None,
        };

        let location: Location = result.into();
        assert_eq!(location.country, "");
        assert_eq!(location.display_name, "Null Island, ");
    }

    #[test]
    fn test_geocoding_response_without_results() {
        let response: GeocodingResponse = serde_json::from_str(r#"{"generationtime_ms":0.5}"#).unwrap();
        assert!(response.results.is_none());
    }

    #[test]
    fn test_daily_series_deserializes_nulls() {
        let json = r#"{
            "daily": {
                "time": ["1970-01-01", "1970-01-02", "1970-01-03"],
                "temperature_2m_max": [20.0, null, 30.0],
                "temperature_2m_min": [null, null, null],
                "temperature_2m_mean": [15.0, 25.0, 20.0]
            }
        }"#;

        let response: DailyTemperatureResponse = serde_json::from_str(json).unwrap();
        let daily = response.daily.unwrap();
        assert_eq!(daily.time.len(), 3);
        assert_eq!(daily.temperature_max, Some(vec![Some(20.0), None, Some(30.0)]));
        assert_eq!(daily.temperature_min, Some(vec![None, None, None]));
    }

    #[test]
    fn test_daily_series_with_missing_arrays() {
        let json = r#"{"daily": {"time": []}}"#;
        let response: DailyTemperatureResponse = serde_json::from_str(json).unwrap();
        let daily = response.daily.unwrap();
        assert!(daily.temperature_max.is_none());
        assert!(daily.temperature_min.is_none());
        assert!(daily.temperature_mean.is_none());
    }
}
