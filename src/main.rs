use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use weathernow::{AppConfig, WeatherLookup, render, web};

fn print_usage() {
    println!("weathernow {}", weathernow::VERSION);
    println!();
    println!("Usage:");
    println!("  weathernow <place name>        Look up current weather once");
    println!("  weathernow --serve [--port N]  Run the web front end");
    println!();
    println!("Weather data by Open-Meteo, no API key required.");
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = AppConfig::from_env();

    match args.first().map(String::as_str) {
        None | Some("--help") | Some("-h") => {
            print_usage();
            Ok(())
        }
        Some("--serve") => {
            let mut port = config.port;
            let mut rest = args[1..].iter();
            while let Some(arg) = rest.next() {
                if arg == "--port" {
                    let value = rest.next().context("--port requires a value")?;
                    port = value
                        .parse()
                        .with_context(|| format!("Invalid port: {value}"))?;
                }
            }
            let lookup = WeatherLookup::new(&config)?;
            web::run(port, lookup).await
        }
        Some(_) => {
            let query = args.join(" ");
            let lookup = WeatherLookup::new(&config)?;
            match lookup.lookup(&query).await {
                Ok(report) => {
                    println!("{}", render::render_text(&report));
                    Ok(())
                }
                Err(e) => {
                    tracing::debug!("Lookup failed: {}", e);
                    eprintln!("{}", e.user_message());
                    std::process::exit(1);
                }
            }
        }
    }
}
