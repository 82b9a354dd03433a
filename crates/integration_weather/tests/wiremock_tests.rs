//! Integration tests for the WeatherAPI.com client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! ensuring proper handling of various response scenarios.

use integration_weather::{WeatherApiClient, WeatherApiConfig, WeatherClient, WeatherError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Sample `current.json` response for testing
fn sample_current_response() -> serde_json::Value {
    serde_json::json!({
        "location": {
            "name": "Paris",
            "region": "Ile-de-France",
            "country": "France",
            "lat": 48.87,
            "lon": 2.33,
            "tz_id": "Europe/Paris",
            "localtime_epoch": 1_705_320_000,
            "localtime": "2024-01-15 13:00"
        },
        "current": {
            "last_updated_epoch": 1_705_319_100,
            "temp_c": 6.0,
            "temp_f": 42.8,
            "is_day": 1,
            "condition": {
                "text": "Overcast",
                "icon": "//cdn.weatherapi.com/weather/64x64/day/122.png",
                "code": 1009
            },
            "wind_kph": 15.1,
            "wind_dir": "SW",
            "humidity": 81,
            "cloud": 100,
            "feelslike_c": 3.4
        }
    })
}

/// Create a test client configured to use the mock server
fn create_test_client(mock_server: &MockServer) -> WeatherApiClient {
    let config = WeatherApiConfig {
        base_url: mock_server.uri(),
        api_key: "test-key".to_string(),
    };
    #[allow(clippy::expect_used)]
    WeatherApiClient::new(config).expect("Failed to create client")
}

/// Setup a mock for the /current.json endpoint with the given response
async fn setup_current_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_get_current_weather_success() {
    let mock_server = MockServer::start().await;

    setup_current_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_current_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("paris", "fr").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let weather = result.unwrap();
    assert_eq!(weather.location_name, "Paris");
    assert_eq!(weather.country, "France");
    assert!((weather.temperature_c - 6.0).abs() < 0.01);
    assert_eq!(weather.humidity, 81);
    assert!((weather.wind_kph - 15.1).abs() < 0.01);
    assert_eq!(weather.condition, "Overcast");
}

#[tokio::test]
async fn test_query_parameters_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .and(query_param("key", "test-key"))
        .and(query_param("q", "Paris,France"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Paris", "France").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn test_city_with_spaces_is_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .and(query_param("q", "New York,United States"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    assert!(client.get_current("New York", "United States").await.is_ok());
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn test_server_error_returns_service_unavailable() {
    let mock_server = MockServer::start().await;

    setup_current_mock(
        &mock_server,
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Paris", "France").await;

    assert!(
        matches!(result, Err(WeatherError::ServiceUnavailable(_))),
        "Expected ServiceUnavailable, got: {result:?}"
    );
}

#[tokio::test]
async fn test_rate_limit_error() {
    let mock_server = MockServer::start().await;

    setup_current_mock(
        &mock_server,
        ResponseTemplate::new(429).set_body_string("Rate limit exceeded"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Paris", "France").await;

    assert!(
        matches!(result, Err(WeatherError::RateLimitExceeded)),
        "Expected RateLimitExceeded, got: {result:?}"
    );
}

#[tokio::test]
async fn test_unknown_location_returns_request_failed() {
    let mock_server = MockServer::start().await;

    setup_current_mock(
        &mock_server,
        ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {"code": 1006, "message": "No matching location found."}
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Nowhere", "Neverland").await;

    match result {
        Err(WeatherError::RequestFailed(msg)) => {
            assert!(msg.contains("No matching location found."), "got: {msg}");
        },
        other => unreachable!("Expected RequestFailed, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_api_key_returns_request_failed() {
    let mock_server = MockServer::start().await;

    setup_current_mock(
        &mock_server,
        ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": {"code": 2006, "message": "API key is invalid."}
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Paris", "France").await;

    assert!(
        matches!(result, Err(WeatherError::RequestFailed(_))),
        "Expected RequestFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_json_response() {
    let mock_server = MockServer::start().await;

    setup_current_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("not valid json"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Paris", "France").await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_unexpected_shape_returns_parse_error() {
    let mock_server = MockServer::start().await;

    setup_current_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "location": {"name": "Paris", "country": "France"}
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Paris", "France").await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_unreachable_server_returns_request_failed() {
    // Port 1 is reserved and nothing listens on it
    let client = WeatherApiClient::new(WeatherApiConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        api_key: "test-key".to_string(),
    })
    .unwrap();

    let result = client.get_current("Paris", "France").await;

    assert!(
        matches!(result, Err(WeatherError::RequestFailed(_))),
        "Expected RequestFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn test_transport_error_does_not_expose_api_key() {
    let client = WeatherApiClient::new(WeatherApiConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        api_key: "TOPSECRETKEY".to_string(),
    })
    .unwrap();

    let err = client.get_current("Paris", "France").await.unwrap_err();

    let message = err.to_string();
    assert!(
        !message.contains("TOPSECRETKEY"),
        "API key leaked into error: {message}"
    );
    assert!(!format!("{err:?}").contains("TOPSECRETKEY"));
}
