//! End-to-end tests of the lookup pipeline against a mock Open-Meteo server

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use weathernow::{AppConfig, LookupError, WeatherLookup};

fn lookup_against(server: &MockServer) -> WeatherLookup {
    let config = AppConfig {
        geocoding_base_url: server.uri(),
        forecast_base_url: server.uri(),
        ..AppConfig::default()
    };
    WeatherLookup::new(&config).expect("client should build")
}

async fn mount_geocode_tokyo(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Tokyo"))
        .and(query_param("count", "1"))
        .and(query_param("language", "en"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "latitude": 35.6895,
                "longitude": 139.6917,
                "name": "Tokyo",
                "country": "Japan"
            }]
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn tokyo_end_to_end() {
    let server = MockServer::start().await;
    mount_geocode_tokyo(&server).await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "35.6895"))
        .and(query_param("longitude", "139.6917"))
        .and(query_param("current_weather", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current_weather": {
                "temperature": 22.3,
                "windspeed": 4.1,
                "weathercode": 1,
                "time": "2024-05-01T12:00"
            }
        })))
        .mount(&server)
        .await;

    let lookup = lookup_against(&server);
    let report = lookup.lookup("Tokyo").await.expect("lookup should succeed");

    assert_eq!(report.location.place_label(), "Tokyo, Japan");
    assert_eq!(report.location.format_coordinates(), "35.690, 139.692");
    assert_eq!(report.description, "Mainly clear");
    assert_eq!(report.current.temperature, 22.3);
    assert!((report.current.temperature_fahrenheit() - 72.14).abs() < 1e-9);
    assert_eq!(report.current.format_temperature(), "22.3°C / 72.1°F");
    assert_eq!(report.current.wind_speed, 4.1);
    assert_eq!(report.current.time, "2024-05-01T12:00");
}

#[tokio::test]
async fn query_is_trimmed_before_geocoding() {
    let server = MockServer::start().await;
    mount_geocode_tokyo(&server).await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current_weather": {
                "temperature": 10.0,
                "windspeed": 2.0,
                "weathercode": 0,
                "time": "2024-05-01T12:00"
            }
        })))
        .mount(&server)
        .await;

    let lookup = lookup_against(&server);
    // The name matcher above only accepts exactly "Tokyo"
    let report = lookup.lookup("  Tokyo  ").await.expect("lookup should succeed");
    assert_eq!(report.description, "Clear sky");
}

#[tokio::test]
async fn admin_region_appears_in_place_label() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "London"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "latitude": 51.50853,
                "longitude": -0.12574,
                "name": "London",
                "country": "United Kingdom",
                "admin1": "England"
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current_weather": {
                "temperature": 14.6,
                "windspeed": 5.8,
                "weathercode": 61,
                "time": "2024-05-01T11:00"
            }
        })))
        .mount(&server)
        .await;

    let lookup = lookup_against(&server);
    let report = lookup.lookup("London").await.expect("lookup should succeed");
    assert_eq!(report.location.place_label(), "London, England, United Kingdom");
    assert_eq!(report.description, "Slight rain");
}

#[tokio::test]
async fn empty_query_fails_without_any_request() {
    let server = MockServer::start().await;
    let lookup = lookup_against(&server);

    for query in ["", "   ", "\t\n"] {
        let err = lookup.lookup(query).await.expect_err("should fail");
        assert!(matches!(err, LookupError::EmptyQuery));
        assert_eq!(err.user_message(), "Please enter a location name.");
    }

    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty(), "expected no HTTP requests, saw {requests:?}");
}

#[tokio::test]
async fn zero_geocoding_results_is_no_match() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&server)
        .await;

    let lookup = lookup_against(&server);
    let err = lookup.lookup("Nowhereville").await.expect_err("should fail");
    assert!(matches!(err, LookupError::NoMatch { .. }));
    assert_eq!(err.user_message(), "No matching location found.");
}

#[tokio::test]
async fn absent_results_field_is_no_match() {
    let server = MockServer::start().await;

    // Open-Meteo omits `results` entirely when nothing matched
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "generationtime_ms": 0.5 })))
        .mount(&server)
        .await;

    let lookup = lookup_against(&server);
    let err = lookup.lookup("zzzzzz").await.expect_err("should fail");
    assert!(matches!(err, LookupError::NoMatch { .. }));
}

#[tokio::test]
async fn geocoding_server_error_is_transport_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let lookup = lookup_against(&server);
    let err = lookup.lookup("Tokyo").await.expect_err("should fail");
    assert!(matches!(err, LookupError::GeocodeRequest { .. }));
    assert_eq!(err.user_message(), "Location not found (geocoding failed).");

    // The weather endpoint must not have been called
    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.iter().all(|r| r.url.path() == "/v1/search"));
}

#[tokio::test]
async fn weather_server_error_is_transport_failure() {
    let server = MockServer::start().await;
    mount_geocode_tokyo(&server).await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let lookup = lookup_against(&server);
    let err = lookup.lookup("Tokyo").await.expect_err("should fail");
    assert!(matches!(err, LookupError::WeatherRequest { .. }));
    assert_eq!(err.user_message(), "Weather request failed.");
}

#[tokio::test]
async fn missing_current_weather_payload_fails_after_geocode() {
    let server = MockServer::start().await;
    mount_geocode_tokyo(&server).await;

    // A valid forecast body that simply lacks the current_weather object
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "latitude": 35.6895,
            "longitude": 139.6917
        })))
        .mount(&server)
        .await;

    let lookup = lookup_against(&server);
    let err = lookup.lookup("Tokyo").await.expect_err("should fail");
    assert!(matches!(err, LookupError::CurrentWeatherMissing));
    assert_eq!(
        err.user_message(),
        "No current weather available from Open-Meteo."
    );
}

#[tokio::test]
async fn unknown_weather_code_maps_to_unknown_label() {
    let server = MockServer::start().await;
    mount_geocode_tokyo(&server).await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current_weather": {
                "temperature": 5.0,
                "windspeed": 1.0,
                "weathercode": 42,
                "time": "2024-05-01T12:00"
            }
        })))
        .mount(&server)
        .await;

    let lookup = lookup_against(&server);
    let report = lookup.lookup("Tokyo").await.expect("lookup should succeed");
    assert_eq!(report.description, "Unknown");
}
