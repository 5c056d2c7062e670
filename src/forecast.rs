//! Forecast fetcher
//!
//! Pulls the current conditions for a coordinate pair from the Open-Meteo
//! forecast API and reduces them to the summary, temperature, rain chance,
//! and display icon the response assembler needs. One call per lookup, no
//! retries.

use async_trait::async_trait;
use tracing::debug;

use crate::error::ForecastError;
use crate::models::{ForecastData, IconCode};

/// Sustained wind at or above this (m/s) shows the wind icon when the sky
/// code alone would pick a clear or cloudy one
const WINDY_THRESHOLD_MS: f64 = 10.0;

/// Seam for the coordinates-to-conditions step of the pipeline
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Fetch current conditions for a coordinate pair.
    ///
    /// Coordinates come from the geocoding resolver and are trusted as-is.
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<ForecastData, ForecastError>;
}

/// Forecast provider backed by the Open-Meteo forecast API
pub struct OpenMeteoForecast {
    client: reqwest::Client,
    base_url: String,
}

impl OpenMeteoForecast {
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoForecast {
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<ForecastData, ForecastError> {
        debug!(
            "Fetching current conditions for ({:.4}, {:.4})",
            latitude, longitude
        );

        let url = format!(
            "{}/forecast?latitude={}&longitude={}&current=temperature_2m,precipitation_probability,weather_code,wind_speed_10m,is_day&wind_speed_unit=ms",
            self.base_url, latitude, longitude
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            debug!("Forecast request failed: {}", e);
            ForecastError::Unreachable
        })?;

        if !response.status().is_success() {
            debug!("Forecast provider returned status {}", response.status());
            return Err(ForecastError::Unreachable);
        }

        let body: openmeteo::ForecastResponse = response.json().await.map_err(|e| {
            debug!("Failed to parse forecast response: {}", e);
            ForecastError::Unreachable
        })?;

        let current = body.current.ok_or_else(|| {
            debug!("Forecast response carried no current conditions");
            ForecastError::Unreachable
        })?;

        Ok(ForecastData::from(current))
    }
}

impl From<openmeteo::CurrentConditions> for ForecastData {
    fn from(current: openmeteo::CurrentConditions) -> Self {
        Self {
            summary: weather_code_to_description(current.weather_code).to_string(),
            // Open-Meteo reports temperature_2m in Celsius; no conversion
            temperature_celsius: current.temperature,
            chance_of_rain_percent: current.precipitation_probability.unwrap_or(0.0),
            icon: icon_for(
                current.weather_code,
                current.is_day != 0,
                current.wind_speed,
            ),
        }
    }
}

/// Convert a WMO weather code to a human-readable description
#[must_use]
pub fn weather_code_to_description(code: u8) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}

/// Pick the display icon for a WMO weather code.
///
/// WMO has no wind condition, so strong sustained wind under an otherwise
/// clear or cloudy sky overrides the sky icon; precipitation keeps its own.
#[must_use]
pub fn icon_for(code: u8, is_day: bool, wind_speed_ms: f64) -> IconCode {
    if code <= 3 && wind_speed_ms >= WINDY_THRESHOLD_MS {
        return IconCode::Wind;
    }
    match (code, is_day) {
        (0, true) => IconCode::ClearDay,
        (0, false) => IconCode::ClearNight,
        (1 | 2, true) => IconCode::PartlyCloudyDay,
        (1 | 2, false) => IconCode::PartlyCloudyNight,
        (3, _) => IconCode::Cloudy,
        (45 | 48, _) => IconCode::Fog,
        (56 | 57 | 66 | 67, _) => IconCode::Sleet,
        (51..=55 | 61..=65 | 80..=82 | 95 | 96 | 99, _) => IconCode::Rain,
        (71..=77 | 85 | 86, _) => IconCode::Snow,
        _ => IconCode::Cloudy,
    }
}

/// `OpenMeteo` forecast API response structures
mod openmeteo {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub current: Option<CurrentConditions>,
    }

    #[derive(Debug, Deserialize)]
    pub struct CurrentConditions {
        #[serde(rename = "temperature_2m")]
        pub temperature: f64,
        #[serde(rename = "precipitation_probability")]
        pub precipitation_probability: Option<f64>,
        #[serde(rename = "weather_code")]
        pub weather_code: u8,
        #[serde(rename = "wind_speed_10m")]
        pub wind_speed: f64,
        /// 1 during daylight, 0 at night
        pub is_day: u8,
    }
}
