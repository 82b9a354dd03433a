//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the SQLite record store, the weather provider adapter,
//! configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, DatabaseConfig, ServerConfig, WeatherAppConfig};
pub use persistence::{AsyncDatabase, AsyncDatabaseConfig, SqliteWeatherRecordStore};
pub use telemetry::{LogFormat, LoggingConfig, TelemetryError, init_logging};
