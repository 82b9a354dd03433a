//! Weather record entity - One stored weather observation for a city

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    errors::DomainError,
    value_objects::{ObservedConditions, WeatherRecordId},
};

/// A persisted weather observation
///
/// Records are independent of each other. The "latest" record for a city is
/// the one with the greatest `fetched_at`, not a separate entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    /// Unique identifier, generated on creation
    pub id: WeatherRecordId,
    /// City name
    pub city_name: String,
    /// Country name
    pub country: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Free-form condition summary
    pub description: String,
    /// Relative humidity in percent
    pub humidity: i32,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// When the observation was retrieved from the provider
    pub fetched_at: DateTime<Utc>,
    /// When the record was inserted
    pub created_at: DateTime<Utc>,
    /// When the record was last written
    pub updated_at: DateTime<Utc>,
}

impl WeatherRecord {
    /// Build a new record from a provider observation
    ///
    /// A fresh id is generated. `created_at` and `updated_at` start at
    /// `fetched_at`; the store replaces them when the record is written.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the city or country is blank.
    pub fn from_observation(
        conditions: ObservedConditions,
        fetched_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if conditions.city_name.trim().is_empty() {
            return Err(DomainError::validation("cityName must not be empty"));
        }
        if conditions.country.trim().is_empty() {
            return Err(DomainError::validation("country must not be empty"));
        }

        Ok(Self {
            id: WeatherRecordId::new(),
            city_name: conditions.city_name,
            country: conditions.country,
            temperature: conditions.temperature,
            description: conditions.description,
            humidity: conditions.humidity,
            wind_speed: conditions.wind_speed,
            fetched_at,
            created_at: fetched_at,
            updated_at: fetched_at,
        })
    }
}
