//! Error types for the lookup pipeline

use thiserror::Error;

/// Terminal failures of a single weather lookup
///
/// Each variant aborts the pipeline at the step where it is detected.
/// Nothing is retried and no partial result is returned.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Query was blank after trimming; no request was made
    #[error("location query is empty")]
    EmptyQuery,

    /// Geocoding call failed at the transport or status level
    #[error("geocoding request failed: {message}")]
    GeocodeRequest { message: String },

    /// Geocoding succeeded but returned no candidates
    #[error("no geocoding match for '{query}'")]
    NoMatch { query: String },

    /// Weather call failed at the transport or status level
    #[error("weather request failed: {message}")]
    WeatherRequest { message: String },

    /// Weather call succeeded but the current-weather payload was absent
    #[error("response contained no current weather data")]
    CurrentWeatherMissing,
}

impl LookupError {
    /// Create a geocoding transport/status error
    pub fn geocode_request<S: Into<String>>(message: S) -> Self {
        Self::GeocodeRequest {
            message: message.into(),
        }
    }

    /// Create an error for a query with no geocoding candidates
    pub fn no_match<S: Into<String>>(query: S) -> Self {
        Self::NoMatch {
            query: query.into(),
        }
    }

    /// Create a weather transport/status error
    pub fn weather_request<S: Into<String>>(message: S) -> Self {
        Self::WeatherRequest {
            message: message.into(),
        }
    }

    /// The message the presentation layer displays verbatim
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            LookupError::EmptyQuery => "Please enter a location name.",
            LookupError::GeocodeRequest { .. } => "Location not found (geocoding failed).",
            LookupError::NoMatch { .. } => "No matching location found.",
            LookupError::WeatherRequest { .. } => "Weather request failed.",
            LookupError::CurrentWeatherMissing => "No current weather available from Open-Meteo.",
        }
    }
}
