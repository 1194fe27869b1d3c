//! `weathernow` - current weather for a free-text place name
//!
//! This library resolves a place name to coordinates via the Open-Meteo
//! geocoding API, fetches current conditions for those coordinates, and
//! shapes the result into a display-ready weather report. The pipeline is
//! presentation-agnostic; the CLI and the web front end both consume it.

pub mod client;
pub mod config;
pub mod error;
pub mod lookup;
pub mod models;
pub mod render;
pub mod weather_codes;
pub mod web;

// Re-export core types for public API
pub use client::OpenMeteoClient;
pub use config::AppConfig;
pub use error::LookupError;
pub use lookup::WeatherLookup;
pub use models::{CurrentWeather, Location, WeatherReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type of the lookup pipeline
pub type Result<T> = std::result::Result<T, LookupError>;
