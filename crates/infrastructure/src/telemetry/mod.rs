//! Logging setup
//!
//! Installs a `tracing-subscriber` registry with an env filter and a
//! console formatter.

mod logging;

pub use logging::{LogFormat, LoggingConfig, TelemetryError, init_logging};
