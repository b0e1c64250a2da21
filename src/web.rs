use anyhow::{Context, Result};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api::{self, AppState};
use crate::config::ClimateDiffConfig;

pub async fn run(config: ClimateDiffConfig) -> Result<()> {
    let state = AppState::new(&config)?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api", api::router())
        .with_state(state)
        .fallback_service(ServeDir::new("frontend/dist"))
        .layer(cors)
        .layer(CatchPanicLayer::new());

    let addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", config.server.port);
    axum::serve(listener, app)
        .await
        .with_context(|| "Web server terminated unexpectedly")?;
    Ok(())
}
