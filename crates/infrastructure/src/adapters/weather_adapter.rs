//! Weather adapter - Implements WeatherPort using integration_weather

use application::{error::ApplicationError, ports::WeatherPort};
use async_trait::async_trait;
use domain::ObservedConditions;
use integration_weather::{
    CurrentWeather, WeatherApiClient, WeatherApiConfig, WeatherClient, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for the WeatherAPI.com provider
pub struct WeatherAdapter {
    client: Box<dyn WeatherClient>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter").finish_non_exhaustive()
    }
}

impl WeatherAdapter {
    /// Create an adapter backed by the HTTP client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: WeatherApiConfig) -> Result<Self, ApplicationError> {
        let client = WeatherApiClient::new(config).map_err(Self::map_error)?;
        Ok(Self::with_client(client))
    }

    /// Create an adapter over any weather client
    #[must_use]
    pub fn with_client(client: impl WeatherClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    /// Every provider failure surfaces as an external service error
    fn map_error(err: WeatherError) -> ApplicationError {
        ApplicationError::ExternalService(err.to_string())
    }

    fn map_current(current: CurrentWeather) -> ObservedConditions {
        ObservedConditions {
            city_name: current.location_name,
            country: current.country,
            temperature: current.temperature_c,
            humidity: current.humidity,
            wind_speed: current.wind_kph,
            description: current.condition,
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self))]
    async fn current_conditions(
        &self,
        city: &str,
        country: &str,
    ) -> Result<ObservedConditions, ApplicationError> {
        match self.client.get_current(city, country).await {
            Ok(current) => {
                debug!(summary = %current.summary(), "Retrieved current weather");
                Ok(Self::map_current(current))
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
                Err(Self::map_error(e))
            },
        }
    }
}
