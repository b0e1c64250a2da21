//! Inbound HTTP API
//!
//! JSON endpoints consumed by the static frontend: location search, the
//! two-era climate comparison, and a health probe. Handlers never fail a
//! request for upstream reasons; the only client-visible error is a missing
//! coordinate pair on `/compare`.

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::comparator::ClimateComparator;
use crate::config::ClimateDiffConfig;
use crate::models::{ComparisonResult, Location};
use crate::open_meteo::OpenMeteoClient;
use crate::resolver::LocationResolver;

/// Name used when the caller does not supply one
const DEFAULT_LOCATION_NAME: &str = "Selected Location";

/// Shared application state: both services over one Open-Meteo client
#[derive(Clone)]
pub struct AppState {
    pub resolver: LocationResolver<OpenMeteoClient>,
    pub comparator: ClimateComparator<OpenMeteoClient>,
}

impl AppState {
    pub fn new(config: &ClimateDiffConfig) -> anyhow::Result<Self> {
        let client = OpenMeteoClient::new(config)?;
        Ok(Self {
            resolver: LocationResolver::new(client.clone()),
            comparator: ClimateComparator::new(client),
        })
    }
}

/// User-visible error payload
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    q: String,
}

#[derive(Debug, Deserialize)]
pub struct CompareParams {
    lat: Option<f64>,
    lng: Option<f64>,
    name: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search", get(search_locations))
        .route("/compare", get(compare_climate))
        .route("/health", get(health))
}

async fn search_locations(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Location>> {
    Json(state.resolver.search(&params.q).await)
}

async fn compare_climate(
    State(state): State<AppState>,
    Query(params): Query<CompareParams>,
) -> Result<Json<ComparisonResult>, (StatusCode, Json<ApiError>)> {
    let (Some(lat), Some(lng)) = (params.lat, params.lng) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError {
                error: "Missing coordinates: both lat and lng query parameters are required"
                    .to_string(),
            }),
        ));
    };

    let name = params
        .name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOCATION_NAME.to_string());

    Ok(Json(state.comparator.compare(lat, lng, &name).await))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: crate::VERSION,
    })
}
