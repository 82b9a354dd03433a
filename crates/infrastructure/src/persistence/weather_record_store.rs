//! SQLite weather record store using sqlx
//!
//! Timestamps are stored as fixed-width RFC3339 strings (UTC, microsecond
//! precision) so that text ordering matches chronological ordering.

use application::{error::ApplicationError, ports::WeatherRecordStore};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use domain::{WeatherRecord, WeatherRecordId};
use sqlx::SqlitePool;
use tracing::{debug, instrument};

use super::error::map_sqlx_error;

const COLUMNS: &str = "id, city_name, country, temperature, description, humidity, wind_speed, \
                       fetched_at, created_at, updated_at";

/// SQLite-backed weather record store
#[derive(Debug, Clone)]
pub struct SqliteWeatherRecordStore {
    pool: SqlitePool,
}

impl SqliteWeatherRecordStore {
    /// Create a new store over an existing pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WeatherRecordStore for SqliteWeatherRecordStore {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<WeatherRecord>, ApplicationError> {
        let rows: Vec<WeatherRecordRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM weather_records ORDER BY created_at ASC, rowid ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(count = rows.len(), "Listed weather records");
        rows.into_iter().map(WeatherRecordRow::into_record).collect()
    }

    #[instrument(skip(self), fields(record_id = %id))]
    async fn get(&self, id: &WeatherRecordId) -> Result<Option<WeatherRecord>, ApplicationError> {
        let row: Option<WeatherRecordRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM weather_records WHERE id = $1"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(WeatherRecordRow::into_record).transpose()
    }

    #[instrument(skip(self))]
    async fn latest_for_city(
        &self,
        city_name: &str,
    ) -> Result<Option<WeatherRecord>, ApplicationError> {
        let row: Option<WeatherRecordRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM weather_records WHERE city_name = $1 \
             ORDER BY fetched_at DESC, rowid DESC LIMIT 1"
        ))
        .bind(city_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(WeatherRecordRow::into_record).transpose()
    }

    #[instrument(skip(self, record), fields(record_id = %record.id, city = %record.city_name))]
    async fn insert(&self, record: &WeatherRecord) -> Result<WeatherRecord, ApplicationError> {
        let now = now_micros();
        let mut stored = record.clone();
        stored.fetched_at = stored.fetched_at.trunc_subsecs(6);
        stored.created_at = now;
        stored.updated_at = now;

        sqlx::query(&format!(
            "INSERT INTO weather_records ({COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)"
        ))
        .bind(stored.id.to_string())
        .bind(&stored.city_name)
        .bind(&stored.country)
        .bind(stored.temperature)
        .bind(&stored.description)
        .bind(stored.humidity)
        .bind(stored.wind_speed)
        .bind(format_timestamp(&stored.fetched_at))
        .bind(format_timestamp(&stored.created_at))
        .bind(format_timestamp(&stored.updated_at))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!("Weather record inserted");
        Ok(stored)
    }

    #[instrument(skip(self, record), fields(record_id = %record.id))]
    async fn update(
        &self,
        record: &WeatherRecord,
    ) -> Result<Option<WeatherRecord>, ApplicationError> {
        let row: Option<WeatherRecordRow> = sqlx::query_as(&format!(
            "UPDATE weather_records SET \
                city_name = $2, country = $3, temperature = $4, description = $5, \
                humidity = $6, wind_speed = $7, fetched_at = $8, updated_at = $9 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        ))
        .bind(record.id.to_string())
        .bind(&record.city_name)
        .bind(&record.country)
        .bind(record.temperature)
        .bind(&record.description)
        .bind(record.humidity)
        .bind(record.wind_speed)
        .bind(format_timestamp(&record.fetched_at))
        .bind(format_timestamp(&now_micros()))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if row.is_none() {
            debug!("No weather record to update");
        }
        row.map(WeatherRecordRow::into_record).transpose()
    }

    #[instrument(skip(self), fields(record_id = %id))]
    async fn delete(&self, id: &WeatherRecordId) -> Result<bool, ApplicationError> {
        let result = sqlx::query("DELETE FROM weather_records WHERE id = $1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}

/// Row type for weather record queries
#[derive(sqlx::FromRow)]
struct WeatherRecordRow {
    id: String,
    city_name: String,
    country: String,
    temperature: f64,
    description: String,
    humidity: i32,
    wind_speed: f64,
    fetched_at: String,
    created_at: String,
    updated_at: String,
}

impl WeatherRecordRow {
    fn into_record(self) -> Result<WeatherRecord, ApplicationError> {
        let id = WeatherRecordId::parse(&self.id)
            .map_err(|e| ApplicationError::Internal(format!("Invalid record id: {e}")))?;

        Ok(WeatherRecord {
            id,
            city_name: self.city_name,
            country: self.country,
            temperature: self.temperature,
            description: self.description,
            humidity: self.humidity,
            wind_speed: self.wind_speed,
            fetched_at: parse_timestamp(&self.fetched_at)?,
            created_at: parse_timestamp(&self.created_at)?,
            updated_at: parse_timestamp(&self.updated_at)?,
        })
    }
}

fn now_micros() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, ApplicationError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ApplicationError::Internal(format!("Invalid timestamp {s}: {e}")))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn timestamps_are_fixed_width() {
        let whole = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let fractional = whole + chrono::Duration::microseconds(1500);

        let a = format_timestamp(&whole);
        let b = format_timestamp(&fractional);

        assert_eq!(a, "2024-01-15T10:00:00.000000Z");
        assert_eq!(a.len(), b.len());
        assert!(a < b);
    }

    #[test]
    fn timestamp_roundtrip_keeps_micros() {
        let ts = now_micros();
        assert_eq!(parse_timestamp(&format_timestamp(&ts)).unwrap(), ts);
    }

    #[test]
    fn invalid_timestamp_is_internal_error() {
        let err = parse_timestamp("yesterday").unwrap_err();
        assert!(matches!(err, ApplicationError::Internal(_)));
    }
}
