//! Application configuration
//!
//! Everything is environment-driven with zero-setup defaults: Open-Meteo
//! needs no API key, so a bare `cargo run` serves a working app.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1";
const DEFAULT_FORECAST_BASE_URL: &str = "https://api.open-meteo.com/v1";
const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Runtime settings for the server and its upstream providers
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server binds to
    pub port: u16,
    /// Base URL of the geocoding provider
    pub geocoding_base_url: String,
    /// Base URL of the forecast provider
    pub forecast_base_url: String,
    /// Timeout applied to each outbound provider call
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            geocoding_base_url: DEFAULT_GEOCODING_BASE_URL.to_string(),
            forecast_base_url: DEFAULT_FORECAST_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// Recognized variables: `WEATHERNOW_PORT`, `WEATHERNOW_GEOCODING_URL`,
    /// `WEATHERNOW_FORECAST_URL`, `WEATHERNOW_TIMEOUT_SECONDS`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(port) = env::var("WEATHERNOW_PORT") {
            config.port = port
                .parse()
                .with_context(|| format!("Invalid WEATHERNOW_PORT: {port}"))?;
        }
        if let Ok(url) = env::var("WEATHERNOW_GEOCODING_URL") {
            config.geocoding_base_url = url;
        }
        if let Ok(url) = env::var("WEATHERNOW_FORECAST_URL") {
            config.forecast_base_url = url;
        }
        if let Ok(secs) = env::var("WEATHERNOW_TIMEOUT_SECONDS") {
            let secs: u64 = secs
                .parse()
                .with_context(|| format!("Invalid WEATHERNOW_TIMEOUT_SECONDS: {secs}"))?;
            config.request_timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for url in [&self.geocoding_base_url, &self.forecast_base_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("Provider base URL must be HTTP or HTTPS: {url}");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(
            config.geocoding_base_url,
            "https://geocoding-api.open-meteo.com/v1"
        );
        assert_eq!(config.forecast_base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_validate_rejects_non_http_urls() {
        let config = AppConfig {
            geocoding_base_url: "ftp://example.com".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
