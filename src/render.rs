//! Display formatting for lookup results
//!
//! Markup escaping lives here, at the point where raw strings are inserted
//! into HTML. The pipeline itself never escapes anything.

use crate::models::WeatherReport;

/// Escape `&`, `<` and `>` for insertion into markup
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Plain-text report for the CLI
#[must_use]
pub fn render_text(report: &WeatherReport) -> String {
    format!(
        "{place}\nCoordinates: {coords}\n{description}, {temperature}\nWind: {wind} m/s\nAs of: {time}",
        place = report.location.place_label(),
        coords = report.location.format_coordinates(),
        description = report.description,
        temperature = report.current.format_temperature(),
        wind = report.current.wind_speed,
        time = report.current.time,
    )
}

/// HTML fragment for a successful lookup
#[must_use]
pub fn render_html(report: &WeatherReport) -> String {
    format!(
        r#"<div class="result">
  <div class="place">{place}</div>
  <div class="muted">Coordinates: {coords}</div>
  <div>{description}, <strong>{temperature_c:.1}&deg;C</strong> / {temperature_f:.1}&deg;F</div>
  <div class="muted">Wind: {wind} m/s &middot; As of: {time}</div>
</div>"#,
        place = escape_html(&report.location.place_label()),
        coords = report.location.format_coordinates(),
        description = escape_html(&report.description),
        temperature_c = report.current.temperature,
        temperature_f = report.current.temperature_fahrenheit(),
        wind = report.current.wind_speed,
        time = escape_html(&report.current.time),
    )
}

/// HTML fragment for a failed lookup
#[must_use]
pub fn render_error_html(message: &str) -> String {
    format!(r#"<div class="error">{}</div>"#, escape_html(message))
}
