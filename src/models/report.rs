//! The per-lookup result bundle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CurrentWeather, Location};

/// Display-ready result of one weather lookup
///
/// Constructed fresh per request and never persisted.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WeatherReport {
    /// The resolved location
    pub location: Location,
    /// Current conditions at that location
    pub current: CurrentWeather,
    /// Human-readable label for the weather code
    pub description: String,
    /// When this report was assembled
    pub fetched_at: DateTime<Utc>,
}
