//! Configuration loading for the vacation pay service.
//!
//! This module loads the service settings (HTTP bind address and the
//! location of the holiday calendar) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use vacation_pay::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/vacation_pay.yaml").unwrap();
//! println!("Holidays from: {}", config.holidays().path.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, DEFAULT_HOLIDAYS_PATH, DEFAULT_HOST, DEFAULT_PORT, HolidaysConfig, ServerConfig,
};
