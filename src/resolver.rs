//! Location search over the geocoding service
//!
//! Wraps the geocoding client with the two behaviors the search box relies
//! on: very short queries never reach the network, and upstream failures
//! collapse to an empty result list at this boundary (logged, never
//! propagated to the HTTP caller).

use crate::Result;
use crate::models::Location;
use crate::open_meteo::OpenMeteoClient;
use tracing::{debug, warn};

/// Queries shorter than this never trigger a network call
const MIN_QUERY_LENGTH: usize = 2;

/// Source of geocoding matches for a free-text query
pub trait GeocodingProvider {
    async fn search_locations(&self, query: &str) -> Result<Vec<Location>>;
}

impl GeocodingProvider for OpenMeteoClient {
    async fn search_locations(&self, query: &str) -> Result<Vec<Location>> {
        OpenMeteoClient::search_locations(self, query).await
    }
}

/// Service for resolving free-text queries into candidate locations
#[derive(Debug, Clone)]
pub struct LocationResolver<G> {
    geocoding: G,
}

impl<G: GeocodingProvider> LocationResolver<G> {
    pub fn new(geocoding: G) -> Self {
        Self { geocoding }
    }

    /// Search for locations matching `query`.
    ///
    /// Returns matches in upstream relevance order. The caller cannot
    /// distinguish "no matches" from "service unavailable"; both come back
    /// as an empty vector, with the failure visible only in the logs.
    pub async fn search(&self, query: &str) -> Vec<Location> {
        let query = query.trim();

        if query.len() < MIN_QUERY_LENGTH {
            debug!("Skipping geocoding for short query: {:?}", query);
            return Vec::new();
        }

        match self.geocoding.search_locations(query).await {
            Ok(locations) => locations,
            Err(e) => {
                warn!("Location search for '{}' failed: {}", query, e);
                Vec::new()
            }
        }
    }
}
