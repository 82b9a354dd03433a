//! Weather provider port
//!
//! Defines the interface for looking up current conditions for a city.

use async_trait::async_trait;
use domain::ObservedConditions;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the external weather provider
///
/// Lookups are a single blocking round trip. Implementations do not retry;
/// any failure is reported as `ApplicationError::ExternalService`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current conditions for a city in a country
    ///
    /// The returned city and country are the provider's canonical names.
    async fn current_conditions(
        &self,
        city: &str,
        country: &str,
    ) -> Result<ObservedConditions, ApplicationError>;
}
