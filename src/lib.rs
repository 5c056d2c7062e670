//! `WeatherNow` - address-to-forecast lookup service
//!
//! This library provides the request pipeline behind the weather lookup app:
//! resolving a free-text address to coordinates, fetching the current
//! conditions for those coordinates, and assembling the JSON payload the
//! browser consumes.

pub mod config;
pub mod error;
pub mod forecast;
pub mod geocode;
pub mod models;
pub mod pipeline;
pub mod web;

// Re-export core types for public API
pub use config::AppConfig;
pub use error::{ForecastError, GeocodeError};
pub use forecast::{ForecastProvider, OpenMeteoForecast};
pub use geocode::{Geocoder, OpenMeteoGeocoder};
pub use models::{AddressQuery, ForecastData, GeoLocation, IconCode, WeatherResponse};
pub use pipeline::WeatherPipeline;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
