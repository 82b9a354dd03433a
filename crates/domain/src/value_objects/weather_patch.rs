//! Partial update for a weather record
//!
//! Update bodies arrive as loosely typed JSON. Each recognised field is
//! coerced from either its numeric or its string representation:
//!
//! | Key | Target | Accepted |
//! |---|---|---|
//! | `temperature` | `f64` | number, numeric string |
//! | `windSpeed` | `f64` | number, numeric string |
//! | `humidity` | `i32` | number (truncated toward zero), base-10 integer string |
//! | `description` | `String` | string |
//!
//! Unknown keys and values that fail coercion are skipped rather than
//! rejected. Skipped keys are kept so callers can log them.
//!
//! ```
//! use domain::value_objects::WeatherPatch;
//! use serde_json::json;
//!
//! let patch = WeatherPatch::from_json(&json!({"humidity": "55", "foo": 1})).unwrap();
//! assert_eq!(patch.humidity, Some(55));
//! assert_eq!(patch.ignored_fields(), ["foo"]);
//! ```

use serde_json::{Map, Value};

use crate::{entities::WeatherRecord, errors::DomainError};

/// Field-by-field partial update; `None` means "leave unchanged"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherPatch {
    /// New temperature in Celsius
    pub temperature: Option<f64>,
    /// New condition summary
    pub description: Option<String>,
    /// New relative humidity in percent
    pub humidity: Option<i32>,
    /// New wind speed
    pub wind_speed: Option<f64>,
    ignored: Vec<String>,
}

impl WeatherPatch {
    /// Build a patch from an arbitrary JSON value
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the value is not a JSON object.
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        value
            .as_object()
            .map(Self::from_json_object)
            .ok_or_else(|| DomainError::validation("update body must be a JSON object"))
    }

    /// Build a patch from a JSON object, coercing recognised fields
    #[must_use]
    pub fn from_json_object(fields: &Map<String, Value>) -> Self {
        let mut patch = Self::default();

        for (key, value) in fields {
            let accepted = match key.as_str() {
                "temperature" => {
                    patch.temperature = coerce_f64(value);
                    patch.temperature.is_some()
                },
                "windSpeed" => {
                    patch.wind_speed = coerce_f64(value);
                    patch.wind_speed.is_some()
                },
                "humidity" => {
                    patch.humidity = coerce_i32(value);
                    patch.humidity.is_some()
                },
                "description" => {
                    patch.description = value.as_str().map(ToString::to_string);
                    patch.description.is_some()
                },
                _ => false,
            };

            if !accepted {
                patch.ignored.push(key.clone());
            }
        }

        patch
    }

    /// Keys that were present in the input but not applied
    #[must_use]
    pub fn ignored_fields(&self) -> &[String] {
        &self.ignored
    }

    /// Whether the patch changes nothing
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.temperature.is_none()
            && self.description.is_none()
            && self.humidity.is_none()
            && self.wind_speed.is_none()
    }

    /// Overwrite the fields present in this patch
    pub fn apply(&self, record: &mut WeatherRecord) {
        if let Some(temperature) = self.temperature {
            record.temperature = temperature;
        }
        if let Some(description) = &self.description {
            record.description.clone_from(description);
        }
        if let Some(humidity) = self.humidity {
            record.humidity = humidity;
        }
        if let Some(wind_speed) = self.wind_speed {
            record.wind_speed = wind_speed;
        }
    }
}

/// Finite floats only; NaN and infinities cannot be serialised back as JSON
fn coerce_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

#[allow(clippy::cast_possible_truncation)]
fn coerce_i32(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return i32::try_from(i).ok();
            }
            let truncated = n.as_f64()?.trunc();
            (f64::from(i32::MIN)..=f64::from(i32::MAX))
                .contains(&truncated)
                .then_some(truncated as i32)
        },
        Value::String(s) => s.parse::<i32>().ok(),
        _ => None,
    }
}
