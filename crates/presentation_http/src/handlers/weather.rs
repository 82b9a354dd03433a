//! Weather record handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use domain::{WeatherPatch, WeatherRecord, WeatherRecordId};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use validator::Validate;

use crate::{
    error::ApiError,
    middleware::{ValidatedJson, not_blank},
    state::AppState,
};

/// Body of `POST /weather`
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWeatherRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "cityName is required"))]
    pub city_name: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "country is required"))]
    pub country: String,
}

/// Body of `DELETE /weather/{id}`
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Path ids that are not UUIDs cannot name a record
fn parse_id(raw: &str) -> Result<WeatherRecordId, ApiError> {
    WeatherRecordId::parse(raw).map_err(|_| {
        debug!(id = %raw, "Malformed weather record id");
        ApiError::NotFound(format!("Weather record not found: {raw}"))
    })
}

/// `GET /weather`
#[instrument(skip(state))]
pub async fn list_records(
    State(state): State<AppState>,
) -> Result<Json<Vec<WeatherRecord>>, ApiError> {
    Ok(Json(state.weather_service.list().await?))
}

/// `GET /weather/{id}`
#[instrument(skip(state))]
pub async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WeatherRecord>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.weather_service.get_by_id(&id).await?))
}

/// `GET /weather/latest/{cityName}`
#[instrument(skip(state))]
pub async fn get_latest_by_city(
    State(state): State<AppState>,
    Path(city_name): Path<String>,
) -> Result<Json<WeatherRecord>, ApiError> {
    Ok(Json(
        state.weather_service.get_latest_by_city(&city_name).await?,
    ))
}

/// `POST /weather`
#[instrument(skip(state, request))]
pub async fn create_record(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateWeatherRequest>,
) -> Result<(StatusCode, Json<WeatherRecord>), ApiError> {
    let record = state
        .weather_service
        .create(&request.city_name, &request.country)
        .await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// `PUT /weather/{id}`
///
/// The body is a partial field map; see [`WeatherPatch`] for coercion rules.
#[instrument(skip(state, payload))]
pub async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<WeatherRecord>, ApiError> {
    let id = parse_id(&id)?;
    let Json(body) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let patch = WeatherPatch::from_json(&body).map_err(application::ApplicationError::from)?;

    Ok(Json(state.weather_service.update(&id, &patch).await?))
}

/// `DELETE /weather/{id}`
#[instrument(skip(state))]
pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = parse_id(&id)?;
    state.weather_service.delete(&id).await?;

    Ok(Json(DeleteResponse {
        message: "Weather record deleted successfully".to_string(),
    }))
}
