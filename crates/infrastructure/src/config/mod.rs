//! Application configuration
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults
//! 2. `config.toml` in the working directory (optional)
//! 3. `WEATHER_SERVICE_*` environment variables, `__` between keys
//!    (e.g. `WEATHER_SERVICE_LOGGING__FORMAT=json`)
//! 4. `PORT`, `DATABASE_URL` and `WEATHER_API_KEY`

mod database;
mod server;
mod weather;

use config::{Config, ConfigError, Environment, File};
pub use database::DatabaseConfig;
use serde::{Deserialize, Serialize};
pub use server::ServerConfig;
pub use weather::WeatherAppConfig;

use crate::telemetry::LoggingConfig;

/// Prefix for structured environment overrides
const ENV_PREFIX: &str = "WEATHER_SERVICE";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Database settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Weather provider settings
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or a value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("weather.api_key", std::env::var("WEATHER_API_KEY").ok())?;

        builder.build()?.try_deserialize()
    }
}
