//! Configuration for the API client and web front end
//!
//! Defaults point at the public Open-Meteo endpoints; the base URLs are
//! overridable so tests can point the client at a local mock server.

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the geocoding API
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,
    /// Base URL of the forecast API
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,
    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Port for the web front end
    #[serde(default = "default_port")]
    pub port: u16,
}

// Default value functions
fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com".to_string()
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_port() -> u16 {
    3000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            geocoding_base_url: default_geocoding_base_url(),
            forecast_base_url: default_forecast_base_url(),
            timeout_seconds: default_timeout_seconds(),
            port: default_port(),
        }
    }
}

impl AppConfig {
    /// Build a configuration from defaults plus `WEATHERNOW_*` environment
    /// overrides
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("WEATHERNOW_GEOCODING_URL") {
            config.geocoding_base_url = url;
        }
        if let Ok(url) = std::env::var("WEATHERNOW_FORECAST_URL") {
            config.forecast_base_url = url;
        }
        if let Ok(port) = std::env::var("WEATHERNOW_PORT") {
            if let Ok(port) = port.parse() {
                config.port = port;
            }
        }
        config
    }
}
