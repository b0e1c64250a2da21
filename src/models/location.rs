//! Location model for geographic coordinates and metadata

use serde::{Deserialize, Serialize};

/// A place returned by the geocoding service
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Location name (city, region, etc.)
    pub name: String,
    /// Country name, empty when the upstream service omits it
    pub country: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Display label, always "name, country"
    pub display_name: String,
}

impl Location {
    /// Create a new location; `display_name` is derived from name and country
    #[must_use]
    pub fn new(name: String, country: String, latitude: f64, longitude: f64) -> Self {
        let display_name = format!("{name}, {country}");
        Self {
            name,
            country,
            latitude,
            longitude,
            display_name,
        }
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_is_derived() {
        let location = Location::new("London".to_string(), "United Kingdom".to_string(), 51.5074, -0.1278);
        assert_eq!(location.display_name, "London, United Kingdom");
    }

    #[test]
    fn test_display_name_with_missing_country() {
        let location = Location::new("Atlantis".to_string(), String::new(), 0.0, 0.0);
        assert_eq!(location.display_name, "Atlantis, ");
    }

    #[test]
    fn test_format_coordinates() {
        let location = Location::new("Interlaken".to_string(), "Switzerland".to_string(), 46.8182, 8.2275);
        assert_eq!(location.format_coordinates(), "46.8182, 8.2275");
    }
}
