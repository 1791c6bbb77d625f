//! Vehicle wire model and the response envelope used by the vehicle service.
//!
//! DESIGN
//! ======
//! Field names mirror the service's camelCase JSON so payloads decode without
//! adapters. Only the identity, model and price are required; everything else
//! is optional because the service fills catalog entries unevenly.

#[cfg(test)]
#[path = "vehicle_test.rs"]
mod vehicle_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::source::SourceError;

/// A vehicle as listed by the vehicle service or the static catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Service-assigned identifier.
    #[serde(deserialize_with = "deserialize_integer")]
    pub id: i64,
    /// Model line, e.g. `"VinFast VF 7"`.
    pub model: String,
    /// Trim level, e.g. `"Plus"`.
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub color: String,
    /// List price in whole VND.
    #[serde(deserialize_with = "deserialize_integer")]
    pub price: i64,
    /// Rated range in kilometres.
    #[serde(default, deserialize_with = "deserialize_count")]
    pub range: Option<u32>,
    /// Top speed in km/h.
    #[serde(default, deserialize_with = "deserialize_count")]
    pub max_speed: Option<u32>,
    /// Free text such as `"24 min (10-70%)"`; bare numbers are kept as text.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub charging_time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub stock: Option<u32>,
    /// Body type, e.g. `"SUV"`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Vehicle {
    /// Model and version joined for headings and appointment payloads.
    #[must_use]
    pub fn display_title(&self) -> String {
        format!("{} {}", self.model.trim(), self.version.trim()).trim().to_owned()
    }

    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Standard `{ success, data, message }` response wrapper.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, turning `success: false` into a rejection.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Rejected`] carrying the service message when the
    /// envelope reports failure.
    pub fn into_data(self) -> Result<Option<T>, SourceError> {
        if self.success {
            Ok(self.data)
        } else {
            Err(SourceError::Rejected(
                self.message
                    .unwrap_or_else(|| "request was not successful".to_owned()),
            ))
        }
    }
}

// Records come from several back-office tools; one loosely typed number must
// not fail the whole list, so numeric fields accept whole floats and numeric
// strings as well as integers.

fn integer_from(value: &serde_json::Value) -> Result<i64, &'static str> {
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float.abs() < 9.0e15
            {
                return Ok(float as i64);
            }
            Err("expected integer-compatible number")
        }
        serde_json::Value::String(text) => text.trim().parse::<i64>().map_err(|_| "expected numeric string"),
        _ => Err("expected number or numeric string"),
    }
}

fn deserialize_integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    integer_from(&value).map_err(D::Error::custom)
}

/// Optional non-negative quantity (range, speed, stock); `null` is `None`.
fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => {
            let int = integer_from(&value).map_err(D::Error::custom)?;
            u32::try_from(int)
                .map(Some)
                .map_err(|_| D::Error::custom("quantity out of range"))
        }
    }
}

/// Optional text that some services send as a bare number.
fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(text)) => Ok(Some(text)),
        Some(serde_json::Value::Number(number)) => Ok(Some(number.to_string())),
        Some(_) => Err(D::Error::custom("expected string or number")),
    }
}
