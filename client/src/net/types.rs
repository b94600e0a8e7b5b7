//! Wire DTOs for the quoting backend.
//!
//! DESIGN
//! ======
//! Entities are transient client copies of backend records. Fields the backend
//! only sometimes expands (nested ports, a quote's rates) default to empty so a
//! sparse payload still decodes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated user as returned by `/auth/me`, `/auth/login` and `/auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend user identifier.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Login email.
    pub email: String,
}

/// Email + password body for login, signup and admin user creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// A sea port identified by its UN/LOCODE.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub name: String,
    pub code: String,
}

/// Partial port as embedded in a port pair.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortSummary {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

/// One side of a port pair: an expanded summary or a bare foreign key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PortRef {
    Id(i64),
    Summary(PortSummary),
}

/// Ordered origin -> destination route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortPair {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(default)]
    pub origin_port: Option<PortRef>,
    #[serde(default)]
    pub destination_port: Option<PortRef>,
    #[serde(default)]
    pub origin_port_id: Option<i64>,
    #[serde(default)]
    pub destination_port_id: Option<i64>,
}

/// Container type such as `"40HC"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerType {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A priced, timed shipping offer for one port pair and container type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Absent when the rate is nested inside a quote.
    #[serde(default)]
    pub port_pair_id: Option<i64>,
    #[serde(default)]
    pub container_type_id: Option<i64>,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub transit_days: i64,
    pub base_rate: f64,
}

/// A customer quote assembled from one or more rates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub title: String,
    /// Open status string; the backend owns the enumeration. `null` reads as empty.
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub status: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub rates: Vec<Rate>,
}

/// Body of `POST /quotes`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewQuote {
    pub title: String,
    pub rate_ids: Vec<i64>,
}

/// Body of `PATCH /quotes/:id`; only changed fields are sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct QuotePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl QuotePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.status.is_none()
    }
}

/// Body of `POST /ports`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewPort {
    pub name: String,
    pub code: String,
}

/// Body of `POST /container_types`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewContainerType {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `POST /port_pairs`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewPortPair {
    pub origin_port_id: i64,
    pub destination_port_id: i64,
}

/// Body of `POST /rates`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewRate {
    pub port_pair_id: i64,
    pub container_type_id: i64,
    pub transit_days: i64,
    pub base_rate: f64,
}

fn deserialize_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
