//! Data models for the weather lookup
//!
//! - Location: geocoding result with coordinates and metadata
//! - Weather: current conditions snapshot
//! - Report: the per-lookup result bundle

pub mod location;
pub mod report;
pub mod weather;

// Re-export all public types for convenient access
pub use location::Location;
pub use report::WeatherReport;
pub use weather::CurrentWeather;
