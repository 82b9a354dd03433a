//! Weather service
//!
//! Use cases for weather records: listing, lookup, creation backed by the
//! weather provider, partial updates and deletion.

use std::{fmt, sync::Arc};

use chrono::Utc;
use domain::{DomainError, WeatherPatch, WeatherRecord, WeatherRecordId};
use tracing::{debug, info, instrument};

use crate::{
    error::ApplicationError,
    ports::{WeatherPort, WeatherRecordStore},
};

/// Weather service orchestrating the record store and the weather provider
pub struct WeatherService {
    store: Arc<dyn WeatherRecordStore>,
    weather: Arc<dyn WeatherPort>,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService").finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a new weather service
    pub fn new(store: Arc<dyn WeatherRecordStore>, weather: Arc<dyn WeatherPort>) -> Self {
        Self { store, weather }
    }

    /// List all stored records
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<WeatherRecord>, ApplicationError> {
        let records = self.store.list().await?;
        debug!(count = records.len(), "Listed weather records");
        Ok(records)
    }

    /// Get a single record by ID
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_by_id(&self, id: &WeatherRecordId) -> Result<WeatherRecord, ApplicationError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| record_not_found(id))
    }

    /// Get the most recently fetched record for a city
    #[instrument(skip(self))]
    pub async fn get_latest_by_city(
        &self,
        city_name: &str,
    ) -> Result<WeatherRecord, ApplicationError> {
        self.store
            .latest_for_city(city_name)
            .await?
            .ok_or_else(|| {
                ApplicationError::NotFound(format!("No weather records found for {city_name}"))
            })
    }

    /// Fetch current conditions from the provider and store them as a new record
    ///
    /// The stored city and country are the provider's canonical names.
    ///
    /// # Arguments
    /// * `city_name` - City to look up, must not be blank
    /// * `country` - Country to disambiguate the city, must not be blank
    #[instrument(skip(self))]
    pub async fn create(
        &self,
        city_name: &str,
        country: &str,
    ) -> Result<WeatherRecord, ApplicationError> {
        if city_name.trim().is_empty() {
            return Err(DomainError::validation("cityName is required").into());
        }
        if country.trim().is_empty() {
            return Err(DomainError::validation("country is required").into());
        }

        let conditions = self.weather.current_conditions(city_name, country).await?;
        let record = WeatherRecord::from_observation(conditions, Utc::now())?;
        let stored = self.store.insert(&record).await?;

        info!(
            id = %stored.id,
            city = %stored.city_name,
            country = %stored.country,
            "Weather record created"
        );
        Ok(stored)
    }

    /// Apply a partial update to an existing record
    ///
    /// Fields the patch could not coerce were already dropped when it was
    /// built; they are logged here and otherwise have no effect.
    #[instrument(skip(self, patch), fields(id = %id))]
    pub async fn update(
        &self,
        id: &WeatherRecordId,
        patch: &WeatherPatch,
    ) -> Result<WeatherRecord, ApplicationError> {
        let mut record = self.get_by_id(id).await?;

        if !patch.ignored_fields().is_empty() {
            debug!(ignored = ?patch.ignored_fields(), "Ignoring unrecognised or malformed fields");
        }

        patch.apply(&mut record);
        let stored = self
            .store
            .update(&record)
            .await?
            .ok_or_else(|| record_not_found(id))?;

        info!("Weather record updated");
        Ok(stored)
    }

    /// Delete a record by ID
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: &WeatherRecordId) -> Result<(), ApplicationError> {
        if !self.store.delete(id).await? {
            return Err(record_not_found(id));
        }

        info!("Weather record deleted");
        Ok(())
    }
}

fn record_not_found(id: &WeatherRecordId) -> ApplicationError {
    ApplicationError::NotFound(format!("Weather record {id} not found"))
}
