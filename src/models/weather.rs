//! Current weather model and display helpers

use serde::{Deserialize, Serialize};

/// A snapshot of current conditions from the weather provider
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CurrentWeather {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Wind speed, in the unit reported by the provider
    pub wind_speed: f64,
    /// WMO weather code
    pub weather_code: u8,
    /// Observation timestamp, passed through verbatim from the provider
    pub time: String,
}

impl CurrentWeather {
    /// Temperature converted to Fahrenheit, full precision
    #[must_use]
    pub fn temperature_fahrenheit(&self) -> f64 {
        self.temperature * 9.0 / 5.0 + 32.0
    }

    /// Format both temperatures to one decimal place
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!(
            "{:.1}°C / {:.1}°F",
            self.temperature,
            self.temperature_fahrenheit()
        )
    }
}
