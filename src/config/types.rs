//! Configuration types for the vacation pay service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the service YAML file. Every field has a default,
//! so a partial file (or an empty one) is valid.

use serde::Deserialize;
use std::path::PathBuf;

/// Default address the HTTP server binds to.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port the HTTP server listens on.
pub const DEFAULT_PORT: u16 = 8080;

/// Default location of the holiday calendar file.
pub const DEFAULT_HOLIDAYS_PATH: &str = "./config/holidays/holidays_2026.json";

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// The host or IP address to bind.
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Returns the `host:port` pair to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Holiday calendar settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HolidaysConfig {
    /// Path to the JSON holiday calendar.
    pub path: PathBuf,
}

impl Default for HolidaysConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_HOLIDAYS_PATH),
        }
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Holiday calendar settings.
    pub holidays: HolidaysConfig,
}
