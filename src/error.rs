//! Error types for the weather lookup pipeline

use thiserror::Error;

/// Errors from the geocoding resolver
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeocodeError {
    /// The provider returned zero candidates for the query
    #[error("Unable to find location. Try another search.")]
    NotFound,

    /// Transport failure or a malformed provider response
    #[error("Unable to connect to location services.")]
    Unreachable,
}

/// Errors from the forecast fetcher
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForecastError {
    /// Transport failure, non-success status, or a malformed provider response
    #[error("Unable to connect to weather service.")]
    Unreachable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocode_messages() {
        assert_eq!(
            GeocodeError::NotFound.to_string(),
            "Unable to find location. Try another search."
        );
        assert_eq!(
            GeocodeError::Unreachable.to_string(),
            "Unable to connect to location services."
        );
    }

    #[test]
    fn test_forecast_message() {
        assert_eq!(
            ForecastError::Unreachable.to_string(),
            "Unable to connect to weather service."
        );
    }
}
