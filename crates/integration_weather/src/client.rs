//! WeatherAPI.com client
//!
//! HTTP client for the WeatherAPI.com `current.json` endpoint.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ApiErrorResponse, ApiResponse, CurrentWeather};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP client could not be constructed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// No API key configured
    #[error("Weather API key is not configured")]
    MissingApiKey,
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherApiConfig {
    /// WeatherAPI.com base URL (default: <http://api.weatherapi.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as the `key` query parameter
    #[serde(default)]
    pub api_key: String,
}

fn default_base_url() -> String {
    "http://api.weatherapi.com/v1".to_string()
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
        }
    }
}

impl std::fmt::Debug for WeatherApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Weather client trait for fetching current conditions
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current weather for a city in a country
    async fn get_current(&self, city: &str, country: &str)
    -> Result<CurrentWeather, WeatherError>;
}

/// WeatherAPI.com HTTP client implementation
#[derive(Debug)]
pub struct WeatherApiClient {
    client: Client,
    config: WeatherApiConfig,
}

impl WeatherApiClient {
    /// Create a new client with the given configuration
    ///
    /// Transport defaults apply; no timeout is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherApiConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Build the endpoint URL for current conditions
    fn current_url(&self) -> String {
        format!("{}/current.json", self.config.base_url.trim_end_matches('/'))
    }

    /// Provider query string: `{city},{country}`
    fn location_query(city: &str, country: &str) -> String {
        format!("{city},{country}")
    }

    /// Turn a non-success response into an error, keeping the provider's message if any
    fn status_error(status: StatusCode, body: &str) -> WeatherError {
        if status == StatusCode::TOO_MANY_REQUESTS {
            return WeatherError::RateLimitExceeded;
        }

        let detail = serde_json::from_str::<ApiErrorResponse>(body).map_or_else(
            |_| format!("HTTP {status}"),
            |e| format!("HTTP {status}: {} (code {})", e.error.message, e.error.code),
        );

        if status.is_server_error() {
            WeatherError::ServiceUnavailable(detail)
        } else {
            WeatherError::RequestFailed(detail)
        }
    }
}

/// The request URL carries the API key, so it is stripped from the message
fn transport_error(e: reqwest::Error) -> WeatherError {
    WeatherError::RequestFailed(e.without_url().to_string())
}

#[async_trait]
impl WeatherClient for WeatherApiClient {
    #[instrument(skip(self))]
    async fn get_current(
        &self,
        city: &str,
        country: &str,
    ) -> Result<CurrentWeather, WeatherError> {
        if self.config.api_key.is_empty() {
            return Err(WeatherError::MissingApiKey);
        }

        let url = self.current_url();
        debug!(url = %url, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("q", Self::location_query(city, country).as_str()),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(transport_error)?;

        if !status.is_success() {
            return Err(Self::status_error(status, &body));
        }

        let api_response: ApiResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::ParseError(e.to_string()))?;

        Ok(api_response.into())
    }
}
