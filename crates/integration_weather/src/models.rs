//! Weather data models
//!
//! Wire types for the WeatherAPI.com `current.json` response and the
//! flattened model handed to callers.

use serde::{Deserialize, Serialize};

/// Current conditions for a resolved location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Location name as resolved by the provider
    pub location_name: String,
    /// Country as resolved by the provider
    pub country: String,
    /// Temperature in Celsius
    pub temperature_c: f64,
    /// Relative humidity percentage
    pub humidity: i32,
    /// Wind speed in km/h
    pub wind_kph: f64,
    /// Condition text, e.g. "Light rain"
    pub condition: String,
}

impl CurrentWeather {
    /// Get a formatted summary of current conditions
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}, {}: {} {:.1}°C, humidity {}%, wind {:.1} km/h",
            self.location_name,
            self.country,
            self.condition,
            self.temperature_c,
            self.humidity,
            self.wind_kph
        )
    }
}

// ============================================================================
// Raw API response structures
// ============================================================================

/// Raw `current.json` response
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    pub location: ApiLocation,
    pub current: ApiCurrent,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiLocation {
    pub name: String,
    pub country: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiCurrent {
    pub temp_c: f64,
    pub humidity: i32,
    pub wind_kph: f64,
    pub condition: ApiCondition,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiCondition {
    pub text: String,
}

/// Error body returned alongside non-success statuses
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetail {
    pub code: i32,
    pub message: String,
}

impl From<ApiResponse> for CurrentWeather {
    fn from(response: ApiResponse) -> Self {
        Self {
            location_name: response.location.name,
            country: response.location.country,
            temperature_c: response.current.temp_c,
            humidity: response.current.humidity,
            wind_kph: response.current.wind_kph,
            condition: response.current.condition.text,
        }
    }
}
