//! Reduction of daily temperature series into era summaries

use crate::models::climate::{TemperatureSummary, round1};
use crate::open_meteo::DailyTemperatureResponse;

/// Daily maxima above this threshold count as extreme heat days (Celsius)
const EXTREME_HEAT_THRESHOLD: f64 = 30.0;

/// Reduces a raw daily series to descriptive statistics
pub struct ClimateAnalyzer;

impl ClimateAnalyzer {
    /// Summarize a daily temperature response.
    ///
    /// Returns `None` when the response carries no daily series or no valid
    /// maximum-temperature readings; a summary is never synthesized from
    /// zeros. The three arrays are filtered independently and may end up
    /// with different lengths, so no index in one array is assumed to line
    /// up with the same index in another.
    #[must_use]
    pub fn summarize(response: &DailyTemperatureResponse) -> Option<TemperatureSummary> {
        let daily = response.daily.as_ref()?;

        let max_temps = filter_present(daily.temperature_max.as_ref());
        let min_temps = filter_present(daily.temperature_min.as_ref());
        let mean_temps = filter_present(daily.temperature_mean.as_ref());

        // Max-temperature presence is the sole gate for producing a summary
        if max_temps.is_empty() {
            return None;
        }

        let hottest_day = max_temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let extreme_hot_days = max_temps
            .iter()
            .filter(|t| **t > EXTREME_HEAT_THRESHOLD)
            .count();

        Some(TemperatureSummary {
            avg_max_temp: round1(mean(&max_temps)),
            avg_min_temp: if min_temps.is_empty() {
                0.0
            } else {
                round1(mean(&min_temps))
            },
            avg_mean_temp: if mean_temps.is_empty() {
                0.0
            } else {
                round1(mean(&mean_temps))
            },
            hottest_day: round1(hottest_day),
            extreme_hot_days,
            total_days: max_temps.len(),
        })
    }
}

/// Drop absent entries from a nullable temperature array
fn filter_present(values: Option<&Vec<Option<f64>>>) -> Vec<f64> {
    values
        .map(|v| v.iter().filter_map(|t| *t).collect())
        .unwrap_or_default()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::open_meteo::DailySeries;
    use rstest::rstest;

    fn response(
        max: Vec<Option<f64>>,
        min: Vec<Option<f64>>,
        mean: Vec<Option<f64>>,
    ) -> DailyTemperatureResponse {
        DailyTemperatureResponse {
            daily: Some(DailySeries {
                time: Vec::new(),
                temperature_max: Some(max),
                temperature_min: Some(min),
                temperature_mean: Some(mean),
            }),
        }
    }

    #[test]
    fn test_summarize_known_series() {
        let response = response(
            vec![Some(20.0), Some(35.0), Some(28.0)],
            vec![Some(10.0), Some(15.0), Some(12.0)],
            vec![Some(15.0), Some(25.0), Some(20.0)],
        );

        let summary = ClimateAnalyzer::summarize(&response).unwrap();
        assert_eq!(summary.avg_max_temp, 27.7);
        assert_eq!(summary.avg_min_temp, 12.3);
        assert_eq!(summary.avg_mean_temp, 20.0);
        assert_eq!(summary.hottest_day, 35.0);
        assert_eq!(summary.extreme_hot_days, 1);
        assert_eq!(summary.total_days, 3);
    }

    #[test]
    fn test_missing_daily_object_yields_no_summary() {
        let response = DailyTemperatureResponse { daily: None };
        assert!(ClimateAnalyzer::summarize(&response).is_none());
    }

    #[test]
    fn test_empty_max_array_yields_no_summary() {
        // Min/mean content is irrelevant once the max array filters to empty
        let response = response(
            vec![],
            vec![Some(10.0), Some(15.0)],
            vec![Some(12.0), Some(18.0)],
        );
        assert!(ClimateAnalyzer::summarize(&response).is_none());
    }

    #[test]
    fn test_all_null_max_array_yields_no_summary() {
        let response = response(vec![None, None, None], vec![Some(10.0)], vec![Some(12.0)]);
        assert!(ClimateAnalyzer::summarize(&response).is_none());
    }

    #[test]
    fn test_absent_max_array_yields_no_summary() {
        let response = DailyTemperatureResponse {
            daily: Some(DailySeries {
                time: Vec::new(),
                temperature_max: None,
                temperature_min: Some(vec![Some(10.0)]),
                temperature_mean: Some(vec![Some(12.0)]),
            }),
        };
        assert!(ClimateAnalyzer::summarize(&response).is_none());
    }

    #[test]
    fn test_null_filtering_is_per_array() {
        // An all-null min array zeroes avg_min without touching the max stats
        let response = response(
            vec![Some(20.0), None, Some(30.0)],
            vec![None, None, None],
            vec![Some(15.0), Some(25.0), Some(20.0)],
        );

        let summary = ClimateAnalyzer::summarize(&response).unwrap();
        assert_eq!(summary.avg_min_temp, 0.0);
        assert_eq!(summary.avg_max_temp, 25.0);
        assert_eq!(summary.total_days, 2);
    }

    #[rstest]
    #[case(vec![Some(30.0)], 0)]
    #[case(vec![Some(30.1)], 1)]
    #[case(vec![Some(29.9), Some(31.0), Some(40.0)], 2)]
    #[case(vec![Some(31.0), None, Some(32.0)], 2)]
    fn test_extreme_hot_days_threshold(
        #[case] max: Vec<Option<f64>>,
        #[case] expected: usize,
    ) {
        let response = response(max, vec![Some(0.0)], vec![Some(0.0)]);
        let summary = ClimateAnalyzer::summarize(&response).unwrap();
        assert_eq!(summary.extreme_hot_days, expected);
    }

    #[test]
    fn test_hottest_day_with_negative_temperatures() {
        let response = response(
            vec![Some(-12.5), Some(-3.4), Some(-30.0)],
            vec![],
            vec![],
        );
        let summary = ClimateAnalyzer::summarize(&response).unwrap();
        assert_eq!(summary.hottest_day, -3.4);
        assert_eq!(summary.extreme_hot_days, 0);
        assert_eq!(summary.avg_min_temp, 0.0);
        assert_eq!(summary.avg_mean_temp, 0.0);
    }
}
