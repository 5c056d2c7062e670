//! Data model for the weather lookup pipeline
//!
//! Nothing here outlives a single request; every value is built fresh from
//! the query or an upstream response and handed to the response assembler.

use serde::{Deserialize, Serialize};

/// The user-supplied lookup query, as it arrives on the wire.
///
/// `address` is optional so the same type can act as the query-string
/// extractor; absence and emptiness are equivalent and both are rejected
/// before anything is sent upstream.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AddressQuery {
    pub address: Option<String>,
}

impl AddressQuery {
    #[must_use]
    pub fn new<S: Into<String>>(address: S) -> Self {
        Self {
            address: Some(address.into()),
        }
    }

    /// The trimmed address, or `None` when absent or blank
    #[must_use]
    pub fn trimmed_address(&self) -> Option<&str> {
        self.address
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }
}

/// A resolved location: coordinates plus a display name
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GeoLocation {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Human-readable place name (city plus region/country)
    pub place_name: String,
}

impl GeoLocation {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, place_name: String) -> Self {
        Self {
            latitude,
            longitude,
            place_name,
        }
    }
}

/// Current conditions extracted from the forecast provider
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastData {
    /// Human-readable description of the conditions
    pub summary: String,
    /// Temperature in Celsius
    pub temperature_celsius: f64,
    /// Precipitation probability as a percentage (0-100)
    pub chance_of_rain_percent: f64,
    /// Display icon for the conditions
    pub icon: IconCode,
}

/// Discrete weather condition icon, from the fixed display set
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum IconCode {
    ClearDay,
    ClearNight,
    PartlyCloudyDay,
    PartlyCloudyNight,
    Cloudy,
    Rain,
    Sleet,
    Snow,
    Wind,
    Fog,
}

impl IconCode {
    /// Wire name of the icon (kebab-case)
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ClearDay => "clear-day",
            Self::ClearNight => "clear-night",
            Self::PartlyCloudyDay => "partly-cloudy-day",
            Self::PartlyCloudyNight => "partly-cloudy-night",
            Self::Cloudy => "cloudy",
            Self::Rain => "rain",
            Self::Sleet => "sleet",
            Self::Snow => "snow",
            Self::Wind => "wind",
            Self::Fog => "fog",
        }
    }
}

/// The JSON payload sent back to the browser.
///
/// Exactly one of the two shapes is ever emitted: an error message, or the
/// full result set. There is no partial mix.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum WeatherResponse {
    Error {
        error: String,
    },
    Success {
        location: String,
        forecast: String,
        temperature: String,
        #[serde(rename = "chanceOfRain")]
        chance_of_rain: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
    },
}

impl WeatherResponse {
    #[must_use]
    pub fn error<S: Into<String>>(message: S) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    /// Assemble the success payload from a resolved location and its forecast
    #[must_use]
    pub fn success(location: &GeoLocation, forecast: &ForecastData) -> Self {
        Self::Success {
            location: location.place_name.clone(),
            forecast: forecast.summary.clone(),
            temperature: format!(
                "{} degree C",
                format_quantity(forecast.temperature_celsius)
            ),
            chance_of_rain: format!("{}%", format_quantity(forecast.chance_of_rain_percent)),
            icon: Some(forecast.icon.as_str().to_string()),
        }
    }
}

/// Format a numeric reading for display: whole values drop the trailing `.0`
fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_address() {
        assert_eq!(AddressQuery::new("Boston").trimmed_address(), Some("Boston"));
        assert_eq!(
            AddressQuery::new("  Boston  ").trimmed_address(),
            Some("Boston")
        );
        assert_eq!(AddressQuery::new("").trimmed_address(), None);
        assert_eq!(AddressQuery::new("   ").trimmed_address(), None);
        assert_eq!(AddressQuery::default().trimmed_address(), None);
    }

    #[test]
    fn test_icon_wire_names() {
        assert_eq!(IconCode::ClearDay.as_str(), "clear-day");
        assert_eq!(IconCode::PartlyCloudyNight.as_str(), "partly-cloudy-night");
        let json = serde_json::to_string(&IconCode::Sleet).unwrap();
        assert_eq!(json, "\"sleet\"");
    }

    #[test]
    fn test_format_quantity_drops_trailing_zero() {
        assert_eq!(format_quantity(20.0), "20");
        assert_eq!(format_quantity(5.0), "5");
        assert_eq!(format_quantity(-3.0), "-3");
        assert_eq!(format_quantity(19.5), "19.5");
    }

    #[test]
    fn test_success_payload_shape() {
        let location = GeoLocation::new(42.36, -71.06, "Boston, MA".to_string());
        let forecast = ForecastData {
            summary: "Clear".to_string(),
            temperature_celsius: 20.0,
            chance_of_rain_percent: 5.0,
            icon: IconCode::ClearDay,
        };
        let json = serde_json::to_value(WeatherResponse::success(&location, &forecast)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "location": "Boston, MA",
                "forecast": "Clear",
                "temperature": "20 degree C",
                "chanceOfRain": "5%",
                "icon": "clear-day",
            })
        );
    }

    #[test]
    fn test_error_payload_shape() {
        let json = serde_json::to_value(WeatherResponse::error("nope")).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "nope" }));
    }
}
