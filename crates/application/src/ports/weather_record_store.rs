//! Weather record storage port
//!
//! Defines the interface for persisting and retrieving weather records.

use async_trait::async_trait;
use domain::{WeatherRecord, WeatherRecordId};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather record persistence
///
/// The store owns `created_at` and `updated_at`: values on the records
/// passed in are replaced by the store's own timestamps.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherRecordStore: Send + Sync {
    /// List all records, oldest first
    async fn list(&self) -> Result<Vec<WeatherRecord>, ApplicationError>;

    /// Get a record by ID
    ///
    /// # Returns
    /// The record if found, None otherwise
    async fn get(&self, id: &WeatherRecordId) -> Result<Option<WeatherRecord>, ApplicationError>;

    /// Get the record with the greatest `fetched_at` for a city
    ///
    /// # Arguments
    /// * `city_name` - Exact city name to match
    async fn latest_for_city(
        &self,
        city_name: &str,
    ) -> Result<Option<WeatherRecord>, ApplicationError>;

    /// Insert a new record
    ///
    /// # Returns
    /// The record as stored, with `created_at` and `updated_at` set
    async fn insert(&self, record: &WeatherRecord) -> Result<WeatherRecord, ApplicationError>;

    /// Overwrite an existing record
    ///
    /// # Returns
    /// The record as stored with a fresh `updated_at`, or None if no row has the record's ID
    async fn update(
        &self,
        record: &WeatherRecord,
    ) -> Result<Option<WeatherRecord>, ApplicationError>;

    /// Delete a record
    ///
    /// # Returns
    /// true if a row was deleted, false if it didn't exist
    async fn delete(&self, id: &WeatherRecordId) -> Result<bool, ApplicationError>;
}
