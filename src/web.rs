//! HTTP surface
//!
//! One JSON endpoint (`/weather`) over the pipeline, three HTML pages, the
//! static asset directory, and a 404 fallback. The pipeline is handed in as
//! state; nothing here reaches for globals.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, Json},
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;

use crate::models::{AddressQuery, WeatherResponse};
use crate::pipeline::WeatherPipeline;

/// Shared per-process state handed to every handler
pub struct AppState {
    pub pipeline: WeatherPipeline,
}

/// Build the application router over the given state
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/weather", get(weather))
        .route("/", get(index_page))
        .route("/about", get(about_page))
        .route("/help", get(help_page))
        .nest_service("/css", ServeDir::new("static/css"))
        .nest_service("/js", ServeDir::new("static/js"))
        .fallback(not_found)
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .with_state(state)
}

/// Bind the listener and serve until shutdown
pub async fn run(state: Arc<AppState>, port: u16) -> Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", port);
    axum::serve(listener, router(state))
        .await
        .context("Server error")?;
    Ok(())
}

/// The JSON lookup endpoint. Always answers 200; failures ride inside the
/// payload as `{ "error": ... }`.
async fn weather(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AddressQuery>,
) -> Json<WeatherResponse> {
    Json(state.pipeline.handle(query).await)
}

async fn index_page() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

async fn about_page() -> Html<&'static str> {
    Html(include_str!("../static/about.html"))
}

async fn help_page() -> Html<&'static str> {
    Html(include_str!("../static/help.html"))
}

async fn not_found() -> (StatusCode, Html<&'static str>) {
    (
        StatusCode::NOT_FOUND,
        Html(include_str!("../static/404.html")),
    )
}
