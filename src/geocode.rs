//! Geocoding resolver
//!
//! Resolves a free-text address into coordinates and a display name through
//! the Open-Meteo geocoding API (no API key required). A single call is made
//! per lookup; failures surface immediately with no retry.

use async_trait::async_trait;
use tracing::debug;

use crate::error::GeocodeError;
use crate::models::GeoLocation;

/// Seam for the address-to-coordinates step of the pipeline
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve a non-empty address into a location.
    ///
    /// Callers validate non-emptiness before invoking; the resolver does not
    /// re-check.
    async fn resolve(&self, address: &str) -> Result<GeoLocation, GeocodeError>;
}

/// Geocoder backed by the Open-Meteo geocoding API
pub struct OpenMeteoGeocoder {
    client: reqwest::Client,
    base_url: String,
}

impl OpenMeteoGeocoder {
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl Geocoder for OpenMeteoGeocoder {
    async fn resolve(&self, address: &str) -> Result<GeoLocation, GeocodeError> {
        debug!("Geocoding address: {}", address);

        let url = format!(
            "{}/search?name={}&count=1&language=en&format=json",
            self.base_url,
            urlencoding::encode(address)
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            debug!("Geocoding request failed: {}", e);
            GeocodeError::Unreachable
        })?;

        if !response.status().is_success() {
            debug!("Geocoding provider returned status {}", response.status());
            return Err(GeocodeError::Unreachable);
        }

        // A body that does not parse is a service failure, not a user error
        let body: openmeteo::GeocodingResponse = response.json().await.map_err(|e| {
            debug!("Failed to parse geocoding response: {}", e);
            GeocodeError::Unreachable
        })?;

        let location = first_candidate(body)?;
        debug!(
            "Resolved '{}' to {} ({:.4}, {:.4})",
            address, location.place_name, location.latitude, location.longitude
        );
        Ok(location)
    }
}

/// Pick the first (best) candidate from a geocoding response
fn first_candidate(response: openmeteo::GeocodingResponse) -> Result<GeoLocation, GeocodeError> {
    response
        .results
        .unwrap_or_default()
        .into_iter()
        .next()
        .map(GeoLocation::from)
        .ok_or(GeocodeError::NotFound)
}

impl From<openmeteo::GeocodingResult> for GeoLocation {
    fn from(result: openmeteo::GeocodingResult) -> Self {
        let mut parts = vec![result.name];
        if let Some(admin1) = result.admin1 {
            parts.push(admin1);
        }
        if let Some(country) = result.country {
            parts.push(country);
        }
        Self {
            latitude: result.latitude,
            longitude: result.longitude,
            place_name: parts.join(", "),
        }
    }
}

/// `OpenMeteo` geocoding API response structures
mod openmeteo {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct GeocodingResponse {
        pub results: Option<Vec<GeocodingResult>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct GeocodingResult {
        pub name: String,
        pub latitude: f64,
        pub longitude: f64,
        pub country: Option<String>,
        pub admin1: Option<String>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> openmeteo::GeocodingResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_first_candidate_wins() {
        let response = parse(
            r#"{"results": [
                {"name": "Boston", "latitude": 42.36, "longitude": -71.06,
                 "country": "United States", "admin1": "Massachusetts"},
                {"name": "Boston", "latitude": 52.97, "longitude": -0.02,
                 "country": "United Kingdom", "admin1": "England"}
            ]}"#,
        );
        let location = first_candidate(response).unwrap();
        assert_eq!(location.latitude, 42.36);
        assert_eq!(location.longitude, -71.06);
        assert_eq!(location.place_name, "Boston, Massachusetts, United States");
    }

    #[test]
    fn test_empty_results_is_not_found() {
        assert_eq!(
            first_candidate(parse(r#"{"results": []}"#)).unwrap_err(),
            GeocodeError::NotFound
        );
        assert_eq!(
            first_candidate(parse("{}")).unwrap_err(),
            GeocodeError::NotFound
        );
    }

    #[test]
    fn test_place_name_skips_missing_parts() {
        let response = parse(
            r#"{"results": [
                {"name": "Null Island", "latitude": 0.0, "longitude": 0.0}
            ]}"#,
        );
        let location = first_candidate(response).unwrap();
        assert_eq!(location.place_name, "Null Island");
    }
}
