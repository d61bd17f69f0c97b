//! Vacation pay HTTP server.
//!
//! Reads the config file named by `VACATION_PAY_CONFIG` (default
//! `./config/vacation_pay.yaml`), loads the holiday calendar it points to and
//! serves the API. A config or calendar that cannot be loaded stops startup.

use std::env;

use tracing::info;
use tracing_subscriber::EnvFilter;
use vacation_pay::api::{AppState, create_router};
use vacation_pay::config::ConfigLoader;
use vacation_pay::holiday::HolidayCalendar;

const CONFIG_PATH_VAR: &str = "VACATION_PAY_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./config/vacation_pay.yaml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = ConfigLoader::load(&config_path)?;
    info!(path = %config_path, "Loaded configuration");

    let holidays = HolidayCalendar::load(&config.holidays().path)?;
    let state = AppState::new(holidays);

    let address = config.server().bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, "Vacation pay service listening");

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
