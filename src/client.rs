//! HTTP client for the Open-Meteo geocoding and forecast APIs
//!
//! Neither endpoint requires an API key. Each method issues a single GET
//! and maps transport or status failures to the matching lookup error;
//! there is no retry logic by design.

use std::time::Duration;

use anyhow::Context;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::LookupError;
use crate::models::{CurrentWeather, Location};

const USER_AGENT: &str = concat!("weathernow/", env!("CARGO_PKG_VERSION"));

/// Client for the Open-Meteo geocoding and forecast endpoints
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    geocoding_base_url: String,
    forecast_base_url: String,
}

impl OpenMeteoClient {
    /// Create a new client with the configured timeout and base URLs
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(USER_AGENT)
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            geocoding_base_url: config.geocoding_base_url.trim_end_matches('/').to_string(),
            forecast_base_url: config.forecast_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a place name to its single best-match location
    ///
    /// Returns `Ok(None)` when the geocoder has no candidates for the name.
    /// Coordinates and names are taken from the provider verbatim.
    pub async fn geocode(&self, name: &str) -> crate::Result<Option<Location>> {
        let url = format!(
            "{}/v1/search?name={}&count=1&language=en&format=json",
            self.geocoding_base_url,
            urlencoding::encode(name)
        );
        debug!("Geocoding request URL: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::geocode_request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Geocoding for '{}' returned status {}", name, status);
            return Err(LookupError::geocode_request(format!("status {status}")));
        }

        let body: wire::GeocodingResponse = response
            .json()
            .await
            .map_err(|e| LookupError::geocode_request(format!("invalid body: {e}")))?;

        let Some(first) = body.results.unwrap_or_default().into_iter().next() else {
            return Ok(None);
        };

        info!(
            "Geocoded '{}' to {} ({:.4}, {:.4})",
            name, first.name, first.latitude, first.longitude
        );
        Ok(Some(first.into()))
    }

    /// Fetch current conditions for the given coordinates
    pub async fn current_weather(&self, lat: f64, lon: f64) -> crate::Result<CurrentWeather> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&current_weather=true",
            self.forecast_base_url, lat, lon
        );
        debug!("Weather request URL: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::weather_request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "Weather request for ({:.4}, {:.4}) returned status {}",
                lat, lon, status
            );
            return Err(LookupError::weather_request(format!("status {status}")));
        }

        let body: wire::ForecastResponse = response
            .json()
            .await
            .map_err(|e| LookupError::weather_request(format!("invalid body: {e}")))?;

        let current = body
            .current_weather
            .ok_or(LookupError::CurrentWeatherMissing)?;

        info!(
            "Current weather at ({:.4}, {:.4}): code {}, {:.1}°C",
            lat, lon, current.weathercode, current.temperature
        );
        Ok(current.into())
    }
}

/// Open-Meteo wire format
mod wire {
    use serde::Deserialize;

    use crate::models::{CurrentWeather, Location};

    /// Geocoding response; `results` is absent when nothing matched
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

    impl From<GeocodingResult> for Location {
        fn from(result: GeocodingResult) -> Self {
            Location {
                latitude: result.latitude,
                longitude: result.longitude,
                name: result.name,
                country: result.country.unwrap_or_else(|| "Unknown".to_string()),
                admin1: result.admin1,
            }
        }
    }

    /// Forecast response, reduced to the current-weather payload
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub current_weather: Option<CurrentWeatherData>,
    }

    #[derive(Debug, Deserialize)]
    pub struct CurrentWeatherData {
        pub temperature: f64,
        pub windspeed: f64,
        pub weathercode: u8,
        pub time: String,
    }

    impl From<CurrentWeatherData> for CurrentWeather {
        fn from(data: CurrentWeatherData) -> Self {
            CurrentWeather {
                temperature: data.temperature,
                wind_speed: data.windspeed,
                weather_code: data.weathercode,
                time: data.time,
            }
        }
    }
}
