//! Weather query pipeline
//!
//! The one flow that matters: validate the address, geocode it, fetch the
//! forecast for the resolved coordinates, and assemble the wire payload.
//! Each stage can fail independently; a failure short-circuits the rest and
//! becomes an `{ "error": ... }` payload. Every path emits exactly one
//! response and nothing propagates to the transport layer as a fault.

use std::sync::Arc;

use tracing::debug;

use crate::forecast::ForecastProvider;
use crate::geocode::Geocoder;
use crate::models::{AddressQuery, WeatherResponse};

pub const MISSING_ADDRESS_MESSAGE: &str = "No address provided, please enter the location.";
pub const FORECAST_DOWN_MESSAGE: &str = "Can't connect to weather services";

/// The geocode-then-forecast pipeline with its two injected resolvers.
///
/// Constructed once at startup and shared across requests; holds no mutable
/// state.
#[derive(Clone)]
pub struct WeatherPipeline {
    geocoder: Arc<dyn Geocoder>,
    forecast: Arc<dyn ForecastProvider>,
}

impl WeatherPipeline {
    #[must_use]
    pub fn new(geocoder: Arc<dyn Geocoder>, forecast: Arc<dyn ForecastProvider>) -> Self {
        Self { geocoder, forecast }
    }

    /// Run one lookup to completion.
    ///
    /// Upstream calls are strictly sequential: the forecast provider is never
    /// invoked unless geocoding succeeded, and the geocoder is never invoked
    /// for an empty address.
    pub async fn handle(&self, query: AddressQuery) -> WeatherResponse {
        let Some(address) = query.trimmed_address() else {
            debug!("Rejected lookup with missing or empty address");
            return WeatherResponse::error(MISSING_ADDRESS_MESSAGE);
        };

        let location = match self.geocoder.resolve(address).await {
            Ok(location) => location,
            Err(e) => {
                debug!("Geocoding failed for '{}': {}", address, e);
                return WeatherResponse::error(e.to_string());
            }
        };

        match self
            .forecast
            .fetch(location.latitude, location.longitude)
            .await
        {
            Ok(forecast) => WeatherResponse::success(&location, &forecast),
            Err(e) => {
                debug!("Forecast failed for {}: {}", location.place_name, e);
                WeatherResponse::error(FORECAST_DOWN_MESSAGE)
            }
        }
    }
}
