//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod weather_port;
mod weather_record_store;

#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::WeatherPort;
#[cfg(test)]
pub use weather_record_store::MockWeatherRecordStore;
pub use weather_record_store::WeatherRecordStore;
