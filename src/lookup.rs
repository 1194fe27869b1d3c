//! The lookup pipeline: place name to coordinates to current weather
//!
//! A strict sequence with no retries and no parallelism: validate the
//! query, geocode it, fetch current weather for the resolved coordinates,
//! shape the report. The first failure aborts the whole lookup.

use chrono::Utc;
use tracing::{debug, instrument};

use crate::client::OpenMeteoClient;
use crate::config::AppConfig;
use crate::error::LookupError;
use crate::models::WeatherReport;
use crate::weather_codes;

/// Resolves a free-text place name and fetches current weather for it
///
/// Cheap to clone; concurrent lookups share only the underlying HTTP
/// client and no mutable state.
#[derive(Debug, Clone)]
pub struct WeatherLookup {
    client: OpenMeteoClient,
}

impl WeatherLookup {
    /// Create a lookup service over a fresh API client
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        Ok(Self {
            client: OpenMeteoClient::new(config)?,
        })
    }

    /// Run one lookup for a raw user query
    #[instrument(skip(self))]
    pub async fn lookup(&self, query: &str) -> crate::Result<WeatherReport> {
        let query = query.trim();
        if query.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        debug!("Resolving location name: {}", query);
        let location = self
            .client
            .geocode(query)
            .await?
            .ok_or_else(|| LookupError::no_match(query))?;

        let current = self
            .client
            .current_weather(location.latitude, location.longitude)
            .await?;

        let description = weather_codes::describe(current.weather_code).to_string();

        Ok(WeatherReport {
            location,
            current,
            description,
            fetched_at: Utc::now(),
        })
    }
}
