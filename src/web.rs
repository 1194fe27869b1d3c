//! Web front end: a small form page plus server-rendered and JSON
//! endpoints over the lookup pipeline
//!
//! Each request runs its own lookup; there is no shared state beyond the
//! cloned lookup service, so no in-flight coordination is needed.

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, Json},
    routing::get,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};

use crate::error::LookupError;
use crate::lookup::WeatherLookup;
use crate::models::WeatherReport;
use crate::render;

#[derive(Debug, Deserialize)]
struct WeatherParams {
    #[serde(default)]
    location: String,
}

/// Build the application router
pub fn router(lookup: WeatherLookup) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/weather", get(weather_page))
        .route("/api/weather", get(weather_api))
        .layer(cors)
        .with_state(lookup)
}

/// Bind and serve until the process is stopped
pub async fn run(port: u16, lookup: WeatherLookup) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Web server running at http://localhost:{}", port);
    axum::serve(listener, router(lookup)).await?;
    Ok(())
}

async fn index() -> Html<String> {
    Html(page(""))
}

/// Server-rendered result page; errors render into the page body
async fn weather_page(
    State(lookup): State<WeatherLookup>,
    Query(params): Query<WeatherParams>,
) -> Html<String> {
    let body = match lookup.lookup(&params.location).await {
        Ok(report) => render::render_html(&report),
        Err(e) => render::render_error_html(e.user_message()),
    };
    Html(page(&body))
}

async fn weather_api(
    State(lookup): State<WeatherLookup>,
    Query(params): Query<WeatherParams>,
) -> Result<Json<WeatherReport>, (StatusCode, Json<Value>)> {
    match lookup.lookup(&params.location).await {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            let status = match &e {
                LookupError::EmptyQuery => StatusCode::BAD_REQUEST,
                LookupError::NoMatch { .. } => StatusCode::NOT_FOUND,
                LookupError::GeocodeRequest { .. }
                | LookupError::WeatherRequest { .. }
                | LookupError::CurrentWeatherMissing => StatusCode::BAD_GATEWAY,
            };
            Err((status, Json(json!({ "error": e.user_message() }))))
        }
    }
}

const STYLE: &str = "body{font-family:sans-serif;max-width:40rem;margin:2rem auto;padding:0 1rem}\
input{padding:.4rem;width:60%}button{padding:.4rem .8rem}\
.result{margin-top:1rem;padding:1rem;border:1px solid #ccc;border-radius:6px}\
.place{font-weight:700;font-size:1.1rem}.muted{color:#666;font-size:.85rem}\
.error{margin-top:1rem;color:#a00}";

fn page(body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<title>weathernow</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
<h1>Weather lookup</h1>\n\
<form action=\"/weather\" method=\"get\">\n\
<input name=\"location\" placeholder=\"City or place name\" autofocus>\n\
<button type=\"submit\">Get weather</button>\n</form>\n{body}\n</body>\n</html>"
    )
}
