//! Location model for geocoding results

use serde::{Deserialize, Serialize};

/// A resolved location, as returned by the geocoder
///
/// Coordinates and names are kept exactly as provided; rounding happens
/// only in the display formatters.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Place name (city, town, etc.)
    pub name: String,
    /// Country name
    pub country: String,
    /// First-level administrative division (state/province), when known
    pub admin1: Option<String>,
}

impl Location {
    /// Compose the display label: "name, admin1, country", with the admin
    /// region omitted when absent or empty
    ///
    /// The returned string is raw text; markup escaping is the caller's
    /// concern at the point of insertion.
    #[must_use]
    pub fn place_label(&self) -> String {
        match self.admin1.as_deref() {
            Some(admin1) if !admin1.is_empty() => {
                format!("{}, {}, {}", self.name, admin1, self.country)
            }
            _ => format!("{}, {}", self.name, self.country),
        }
    }

    /// Format coordinates for display, rounded to three decimal places
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.3}, {:.3}", self.latitude, self.longitude)
    }
}
