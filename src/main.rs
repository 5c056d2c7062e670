use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use weathernow::config::AppConfig;
use weathernow::forecast::OpenMeteoForecast;
use weathernow::geocode::OpenMeteoGeocoder;
use weathernow::pipeline::WeatherPipeline;
use weathernow::web::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().context("Failed to load configuration")?;

    let client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .user_agent(concat!("weathernow/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to create HTTP client")?;

    let geocoder = OpenMeteoGeocoder::new(client.clone(), config.geocoding_base_url.clone());
    let forecast = OpenMeteoForecast::new(client, config.forecast_base_url.clone());
    let pipeline = WeatherPipeline::new(Arc::new(geocoder), Arc::new(forecast));

    let state = Arc::new(AppState { pipeline });
    web::run(state, config.port).await
}
