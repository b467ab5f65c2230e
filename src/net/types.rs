//! Wire DTOs for the remote row source.
//!
//! DESIGN
//! ======
//! The endpoint is third-party and loosely typed, so decoding is lenient
//! where the UI can cope: integer ids may arrive as `1.0`, string fields may
//! be `null`, and a missing or `null` `data` array means "no rows".

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Row identifier as sent by the server.
pub type RowId = i64;

/// One record of the remote collection.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DataRow {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: RowId,
    /// Full name; split into first/last at display time.
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub email: String,
    /// ISO-8601 creation timestamp.
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub created_at: String,
    /// ISO-8601 last-update timestamp.
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub updated_at: String,
}

/// Top-level response body: `{ "data": [...] }`. Other fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RowsResponse {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub data: Vec<DataRow>,
}

fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Number(number) = value else {
        return Err(D::Error::custom("expected numeric row id"));
    };
    if let Some(int) = number.as_i64() {
        return Ok(int);
    }
    match number.as_f64() {
        Some(float) if float.is_finite() && float.fract() == 0.0 && float.abs() <= i64::MAX as f64 => {
            Ok(float as i64)
        }
        _ => Err(D::Error::custom("row id must be an integer")),
    }
}
