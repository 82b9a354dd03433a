//! Current conditions reported by the weather provider

use serde::{Deserialize, Serialize};

/// A single observation of current weather for a city
///
/// `city_name` and `country` are the canonical names as resolved by the
/// provider, which may differ from what the caller asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservedConditions {
    /// City name as resolved by the provider
    pub city_name: String,
    /// Country name as resolved by the provider
    pub country: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: i32,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Short condition text, e.g. "Partly cloudy"
    pub description: String,
}
