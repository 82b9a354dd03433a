//! Shared handler state

use std::sync::Arc;

use application::WeatherService;

/// State shared by all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Weather record use cases
    pub weather_service: Arc<WeatherService>,
}

impl AppState {
    /// Create state around a weather service
    #[must_use]
    pub fn new(weather_service: WeatherService) -> Self {
        Self {
            weather_service: Arc::new(weather_service),
        }
    }
}
