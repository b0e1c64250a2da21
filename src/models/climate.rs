//! Temperature summaries and era comparison results

use serde::{Deserialize, Serialize};

/// Round a temperature to one decimal place.
///
/// Single rounding convention for every 1-decimal value the service emits
/// (`f64::round`, half away from zero).
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Descriptive statistics over one era of daily maximum/minimum/mean
/// temperatures. All temperatures are in Celsius, rounded to one decimal.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TemperatureSummary {
    /// Average of the daily maximum temperatures
    pub avg_max_temp: f64,
    /// Average of the daily minimum temperatures, 0.0 when no minima exist
    pub avg_min_temp: f64,
    /// Average of the daily mean temperatures, 0.0 when no means exist
    pub avg_mean_temp: f64,
    /// Highest daily maximum seen in the era
    pub hottest_day: f64,
    /// Days whose maximum exceeded 30 °C
    pub extreme_hot_days: usize,
    /// Days with a valid maximum reading
    pub total_days: usize,
}

/// Comparison between the historical and recent temperature eras for
/// a single location
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ComparisonResult {
    /// Human-readable name of the compared location
    pub location_name: String,
    /// Summary for the historical era, absent when no data was available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub historical_summary: Option<TemperatureSummary>,
    /// Summary for the recent era, absent when no data was available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_summary: Option<TemperatureSummary>,
    /// Change in average mean temperature (recent - historical), 0.0
    /// whenever either summary is absent
    pub temperature_change: f64,
    /// True only when both eras produced a summary
    pub has_data: bool,
}

impl ComparisonResult {
    /// Assemble a comparison from the two era summaries.
    ///
    /// `temperature_change` is defined only when both summaries are present;
    /// otherwise it is reported as 0.0, not omitted, and `has_data` is false.
    #[must_use]
    pub fn new(
        location_name: impl Into<String>,
        historical_summary: Option<TemperatureSummary>,
        recent_summary: Option<TemperatureSummary>,
    ) -> Self {
        let temperature_change = match (&historical_summary, &recent_summary) {
            (Some(historical), Some(recent)) => {
                round1(recent.avg_mean_temp - historical.avg_mean_temp)
            }
            _ => 0.0,
        };
        let has_data = historical_summary.is_some() && recent_summary.is_some();

        Self {
            location_name: location_name.into(),
            historical_summary,
            recent_summary,
            temperature_change,
            has_data,
        }
    }
}
